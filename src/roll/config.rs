pub struct Config {
    pub ballots_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ballots_path: "ballots_with_coordinates_filled.csv".into(),
        }
    }
}
