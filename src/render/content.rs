//! Static text shown around the charts.

use serde::Serialize;

pub const PAGE_TITLE: &str = "Bike Rental Analysis Dashboard";

pub const WEATHER_TAB: &str = "Weather & Temperature Effects";
pub const HOURLY_TAB: &str = "Hourly Distribution";

pub const WEATHER_HEADING: &str = "Effect of Weather Conditions on Bike Rentals";
pub const TEMPERATURE_HEADING: &str = "Effect of Temperature on Bike Rentals";
pub const HOURLY_HEADING: &str = "Bike Rentals per Hour of the Day";

pub const WEATHER_CONCLUSIONS: &[&str] = &[
    "Clearer weather comes with more rentals than poor weather.",
    "Rentals rise as the air temperature gets warmer.",
];

pub const HOURLY_CONCLUSIONS: &[&str] = &[
    "Weekday: rentals climb in the morning (07:00-09:00) and evening (17:00-19:00), pointing to commutes to work or school.",
    "Weekend: a flatter pattern peaking from midday into the afternoon (11:00-17:00), pointing to leisure riding.",
];

pub const ABOUT: &str = "The Bike Rental Analysis Dashboard summarizes bike rental trends by weather, temperature and time of day.";

pub const FEATURES: &[&str] = &[
    "Bike rentals by weather and temperature",
    "Hourly rental distribution (weekday vs weekend)",
];

pub const GOAL: &str = "Help understand borrowing patterns so the rental system can be run on better decisions.";

pub const THANKS: &str = "Thanks for visiting this dashboard!";

/// Author card shown in the sidebar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub dicoding_id: String,
    pub avatar_url: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Ismi Nilam Anggraini".to_string(),
            email: "isminilamng@gmail.com".to_string(),
            dicoding_id: "isminilam".to_string(),
            avatar_url: "https://img.khan.co.kr/news/2021/12/23/l_2021122401003030400267441.jpg"
                .to_string(),
        }
    }
}
