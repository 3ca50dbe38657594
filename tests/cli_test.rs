#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::Cursor;
    use std::sync::{Arc, Mutex};
    use std::io::Write;

    use pony_maze::{CliNavigator, InMemoryGateway, MazeClient};

    /// Output sink shared with the test after the navigator is boxed.
    #[derive(Clone, Default)]
    struct SharedOutput(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedOutput {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl SharedOutput {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    async fn run_script(script: &str, gateway: InMemoryGateway) -> (anyhow::Result<()>, String) {
        let output = SharedOutput::default();
        let navigator = CliNavigator::new(Cursor::new(script.as_bytes().to_vec()), output.clone());
        let mut client = MazeClient::new(Box::new(navigator), Box::new(gateway));
        let res = client.run().await;
        (res, output.text())
    }

    #[tokio::test]
    async fn test_start_print_and_exit() {
        // start, bad width, width, height, empty name, name, print, exit game, exit
        let script = "1\n14\n15\n15\n\nPinkie Pie\n1\n3\n2\n";
        let (res, out) = run_script(script, InMemoryGateway::with_seed(21)).await;
        assert!(res.is_ok(), "{:?}", res);
        assert!(out.contains("Input maze width:"));
        assert!(out.contains("The value must be greater than or equal to 15"));
        assert!(out.contains("The value can't be empty"));
        assert_eq!(out.matches("Current game state: active").count(), 2);
        assert!(out.trim_end().ends_with("See Ya!"));
    }

    #[tokio::test]
    async fn test_rejected_name_is_reported() {
        let gateway = InMemoryGateway::with_seed(21).with_allowed_players(["Rarity"]);
        let script = "1\n15\n15\nSpike\nRarity\n3\n2\n";
        let (res, out) = run_script(script, gateway).await;
        assert!(res.is_ok(), "{:?}", res);
        assert!(out.contains("Only ponies can play"));
        assert_eq!(out.matches("Input a valid pony player name").count(), 2);
    }

    #[tokio::test]
    async fn test_move_menu_then_cancel() {
        // Move opens the direction menu; the last entry is always Cancel
        let script = "1\n15\n15\nRarity\n2\n";
        let output = SharedOutput::default();
        let gateway = InMemoryGateway::with_seed(4);
        let navigator = CliNavigator::new(Cursor::new(script.as_bytes().to_vec()), output.clone());
        let mut client = MazeClient::new(Box::new(navigator), Box::new(gateway));
        // script ends at the direction menu, so input runs out there
        assert!(client.run().await.is_err());
        let out = output.text();
        assert!(out.contains("Where do you want to move?"));
        assert!(out.contains(") Cancel"));
    }

    #[tokio::test]
    async fn test_invalid_menu_entry_is_reasked() {
        let (res, out) = run_script("9\nx\n2\n", InMemoryGateway::with_seed(1)).await;
        assert!(res.is_ok());
        assert_eq!(out.matches("Please enter a number between 1 and 2").count(), 2);
    }
}
