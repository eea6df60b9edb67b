pub fn run() -> String {
    "Pong!".to_string()
}
