//! HTML rendering of the dashboard page.
//!
//! The page is a single self-contained document: inline CSS, inline SVG
//! charts and CSS-only tabs, so it opens straight from disk.

pub mod chart;
pub mod content;

use chrono::Datelike;

use crate::analyzers::analyzer::Dashboard;
use crate::analyzers::types::{DayType, TemperatureBucket};
use crate::config::{HOURS_PER_DAY, WEATHER_ALLOW_LIST};
use chart::{COOLWARM, Labels, LineSeries, VIRIDIS, bar_chart, line_chart};
use content::Profile;

const STYLE: &str = r#"
body { margin: 0; font-family: "Source Sans Pro", Helvetica, Arial, sans-serif; color: #262730; display: flex; }
aside { width: 300px; min-height: 100vh; background: #f0f2f6; padding: 24px; box-sizing: border-box; }
aside .avatar img { border-radius: 100%; display: block; margin: auto; width: 150px; height: 150px; object-fit: cover; }
main { flex: 1; padding: 24px 48px; }
.tabs > input { display: none; }
.tabs > label { display: inline-block; padding: 8px 16px; cursor: pointer; border-bottom: 2px solid transparent; }
.tabs > input:checked + label { border-bottom-color: #ff4b4b; color: #ff4b4b; }
.panel { display: none; }
#tab-weather:checked ~ #panel-weather, #tab-hourly:checked ~ #panel-hourly { display: block; }
svg.chart { width: 100%; height: auto; }
svg.chart .grid { stroke: #ccc; }
svg.chart .axis { stroke: #444; }
svg.chart .chart-title { font-size: 18px; font-weight: 600; }
svg.chart .tick, svg.chart .bar-value { font-size: 12px; }
footer { color: #808495; font-size: 14px; margin-top: 32px; }
"#;

/// Escapes text for use in HTML element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Renders the complete dashboard page.
pub fn render_page(dashboard: &Dashboard, profile: &Profile) -> String {
    let mut page = String::new();

    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str(&format!("<title>{}</title>\n", escape(content::PAGE_TITLE)));
    page.push_str(&format!("<style>{STYLE}</style>\n</head>\n<body>\n"));

    page.push_str(&render_sidebar(profile));

    page.push_str("<main>\n");
    page.push_str(&format!("<h1>{}</h1>\n", escape(content::PAGE_TITLE)));
    page.push_str("<div class=\"tabs\">\n");
    page.push_str(&format!(
        "<input type=\"radio\" name=\"tab\" id=\"tab-weather\" checked><label for=\"tab-weather\">{}</label>\n",
        escape(content::WEATHER_TAB)
    ));
    page.push_str(&format!(
        "<input type=\"radio\" name=\"tab\" id=\"tab-hourly\"><label for=\"tab-hourly\">{}</label>\n",
        escape(content::HOURLY_TAB)
    ));
    page.push_str(&render_weather_panel(dashboard));
    page.push_str(&render_hourly_panel(dashboard));
    page.push_str("</div>\n");

    page.push_str(&format!(
        "<footer>{} (c) {}</footer>\n",
        escape(&profile.dicoding_id),
        dashboard.generated_at.year()
    ));
    page.push_str("</main>\n</body>\n</html>\n");

    page
}

fn render_conclusions(points: &[&str]) -> String {
    let mut block = String::from("<div class=\"conclusions\">\n<p><strong>Conclusions</strong>:</p>\n<ul>\n");
    for point in points {
        block.push_str(&format!("<li>{}</li>\n", escape(point)));
    }
    block.push_str("</ul>\n</div>\n");
    block
}

fn render_weather_panel(dashboard: &Dashboard) -> String {
    let mut panel = String::from("<section class=\"panel\" id=\"panel-weather\">\n");

    let weather_bars: Vec<(&str, f64)> = dashboard.weather.ordered(WEATHER_ALLOW_LIST).collect();
    panel.push_str(&format!("<h2>{}</h2>\n", escape(content::WEATHER_HEADING)));
    panel.push_str(&bar_chart(
        &Labels {
            title: content::WEATHER_HEADING,
            x: "Weather Condition",
            y: "Average Bike Rentals",
        },
        &weather_bars,
        COOLWARM,
    ));
    panel.push('\n');

    let temperature_bars: Vec<(&str, f64)> = TemperatureBucket::ALL
        .iter()
        .filter_map(|bucket| {
            dashboard
                .temperature
                .mean_rentals
                .get(bucket)
                .map(|mean| (bucket.label(), *mean))
        })
        .collect();
    panel.push_str(&format!("<h2>{}</h2>\n", escape(content::TEMPERATURE_HEADING)));
    panel.push_str(&bar_chart(
        &Labels {
            title: content::TEMPERATURE_HEADING,
            x: "Temperature Category",
            y: "Average Bike Rentals",
        },
        &temperature_bars,
        VIRIDIS,
    ));
    panel.push('\n');

    panel.push_str(&render_conclusions(content::WEATHER_CONCLUSIONS));
    panel.push_str("</section>\n");
    panel
}

fn render_hourly_panel(dashboard: &Dashboard) -> String {
    let mut panel = String::from("<section class=\"panel\" id=\"panel-hourly\">\n");

    let series: Vec<LineSeries<'_>> = DayType::ALL
        .iter()
        .zip(["blue", "orange"])
        .map(|(day_type, color)| LineSeries {
            name: day_type.label(),
            color,
            points: dashboard
                .hourly
                .series(*day_type)
                .into_iter()
                .map(|(hour, total)| (hour, total as f64))
                .collect(),
        })
        .collect();

    panel.push_str(&format!("<h2>{}</h2>\n", escape(content::HOURLY_HEADING)));
    panel.push_str(&line_chart(
        &Labels {
            title: "Bike Rentals by Time of Day (Weekday vs Weekend)",
            x: "Hour of Day",
            y: "Number of Bike Rentals",
        },
        "Day Type",
        &series,
        HOURS_PER_DAY,
    ));
    panel.push('\n');

    panel.push_str(&render_conclusions(content::HOURLY_CONCLUSIONS));
    panel.push_str("</section>\n");
    panel
}

fn render_sidebar(profile: &Profile) -> String {
    let mut side = String::from("<aside>\n");

    side.push_str(&format!(
        "<div class=\"avatar\"><img src=\"{}\" alt=\"{}\"></div>\n<hr>\n",
        escape(&profile.avatar_url),
        escape(&profile.name)
    ));
    side.push_str("<h2>My Profile</h2>\n<ul class=\"profile\">\n");
    side.push_str(&format!("<li><strong>Name</strong>: {}</li>\n", escape(&profile.name)));
    side.push_str(&format!(
        "<li><strong>Email</strong>: <a href=\"mailto:{email}\">{email}</a></li>\n",
        email = escape(&profile.email)
    ));
    side.push_str(&format!(
        "<li><strong>Dicoding ID</strong>: {}</li>\n</ul>\n<hr>\n",
        escape(&profile.dicoding_id)
    ));

    side.push_str("<h2>About This Website</h2>\n");
    side.push_str(&format!("<p>{}</p>\n", escape(content::ABOUT)));
    side.push_str("<p><strong>Main features</strong>:</p>\n<ul>\n");
    for feature in content::FEATURES {
        side.push_str(&format!("<li>{}</li>\n", escape(feature)));
    }
    side.push_str("</ul>\n");
    side.push_str(&format!(
        "<p><strong>Goal</strong>: {}</p>\n<hr>\n",
        escape(content::GOAL)
    ));
    side.push_str(&format!("<p><strong>{}</strong></p>\n", escape(content::THANKS)));

    side.push_str("</aside>\n");
    side
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::types::Observation;

    fn obs(weather: &str, temp: f64, hr: u8, day_type: DayType, cnt: u64) -> Observation {
        Observation {
            weather_condition: weather.to_string(),
            temperature: temp,
            hour_of_day: hr,
            day_type,
            rental_count: cnt,
        }
    }

    fn sample_dashboard() -> Dashboard {
        Dashboard::from_observations(&[
            obs("Cerah", 0.7, 8, DayType::Weekday, 200),
            obs("Mendung", 0.3, 17, DayType::Weekday, 150),
            obs("Hujan Ringan", 0.1, 12, DayType::Weekend, 40),
        ])
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a & <b> \"c\" 'd'"), "a &amp; &lt;b&gt; &quot;c&quot; &#39;d&#39;");
        assert_eq!(escape("Cerah"), "Cerah");
    }

    #[test]
    fn test_page_has_both_sections_and_three_charts() {
        let page = render_page(&sample_dashboard(), &Profile::default());

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("Weather &amp; Temperature Effects"));
        assert!(page.contains("Hourly Distribution"));
        assert_eq!(page.matches("<svg class=\"chart\"").count(), 3);
        assert_eq!(page.matches("<div class=\"conclusions\">").count(), 2);
    }

    #[test]
    fn test_page_weather_bars_follow_allow_list_order() {
        let page = render_page(&sample_dashboard(), &Profile::default());

        let rain = page.find(">Hujan Ringan<").unwrap();
        let clear = page.find(">Cerah<").unwrap();
        let overcast = page.find(">Mendung<").unwrap();
        assert!(rain < clear && clear < overcast);
    }

    #[test]
    fn test_page_sidebar_and_footer() {
        let profile = Profile {
            name: "A <Tester>".to_string(),
            email: "a@example.com".to_string(),
            dicoding_id: "tester".to_string(),
            avatar_url: "https://example.com/a.png".to_string(),
        };
        let dashboard = sample_dashboard();
        let page = render_page(&dashboard, &profile);

        assert!(page.contains("A &lt;Tester&gt;"));
        assert!(page.contains("mailto:a@example.com"));
        assert!(page.contains(&format!("tester (c) {}", dashboard.generated_at.year())));
    }

    #[test]
    fn test_page_with_no_kept_rows() {
        let dashboard = Dashboard::from_observations(&[obs("Salju", 0.1, 3, DayType::Weekend, 4)]);
        let page = render_page(&dashboard, &Profile::default());

        assert_eq!(page.matches("No data").count(), 3);
    }
}
