use serde::{Deserialize, Serialize};

/// One point of the load-average series shown by the load chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadPoint {
    pub time: String,
    pub value: f32,
}

impl LoadPoint {
    pub fn series(one: f32, five: f32, fifteen: f32) -> Vec<LoadPoint> {
        vec![
            LoadPoint {
                time: String::from("1 Min"),
                value: one,
            },
            LoadPoint {
                time: String::from("5 Mins"),
                value: five,
            },
            LoadPoint {
                time: String::from("15 Mins"),
                value: fifteen,
            },
        ]
    }
}
