use sailnav_core::nav_processor::Fix;

pub const HARBOUR_EXIT: &str = "./tests/data/harbour_exit.csv";

pub fn load_fixes(path: &str) -> Vec<Fix> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    reader
        .deserialize()
        .map(|record| record.unwrap())
        .collect()
}

pub fn fix(latitude: f64, longitude: f64, timestamp_ms: i64) -> Fix {
    Fix::new(latitude, longitude, timestamp_ms)
}

pub fn device_fix(
    latitude: f64,
    longitude: f64,
    timestamp_ms: i64,
    heading: f64,
    speed: f64,
) -> Fix {
    Fix {
        heading: Some(heading),
        speed: Some(speed),
        ..Fix::new(latitude, longitude, timestamp_ms)
    }
}
