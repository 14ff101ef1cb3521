use chrono::NaiveDateTime;
use log::warn;
use anyhow::Result;
use thiserror::Error;
use crate::manager_dwd::models::PollenForecast;

/// The sub-region the report covers (DWD region 30 is Niedersachsen/Bremen)
pub const REGION_ID: i64 = 30;
pub const PARTREGION_ID: i64 = 32;

const UPDATE_FORMAT: &str = "%Y-%m-%d %H:%M Uhr";
const REPORT_FORMAT: &str = "%d.%m.%Y, %H.%M";

/// Load code to marker fragment, total over the codes DWD emits
const MARKERS: [(&str, &str); 7] = [
    ("0", "<div class='kreis gruen'></div>"),
    ("0-1", "<div class='kreis gruengruengelb'></div>"),
    ("1", "<div class='kreis gruengelb'></div>"),
    ("1-2", "<div class='kreis gelb'></div>"),
    ("2", "<div class='kreis gelbgelbrot'></div>"),
    ("2-3", "<div class='kreis gelbrot'></div>"),
    ("3", "<div class='kreis rot'></div>"),
];

const HTML_HEAD: &str = r#"
<!DOCTYPE html>
<html lang="de">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <font face="arial,helvetica">
    <title>Pollenflugvorhersage</title>
  <style>
    .kreis {
      width: 10px;
      height: 10px;
      border-radius: 50%;
      margin: 1px;
    }

    .gruen {
      background-color: green;
    }

    .gruengruengelb {
      background-color: yellowgreen;
    }

    .gruengelb {
      background-color: Gold;
    }

    .gelb {
      background-color: yellow;
    }

    .gelbgelbrot {
      background-color: Orange;
    }

    .gelbrot {
      background-color: OrangeRed;
    }

    .rot {
      background-color: red;
    }
  </style>

</head>
<body>"#;

const TABLE_HEAD: &str = r#"
    <table>
        <tr>
            <td></td>
            <td width=60 align=center>Gestern</td>
            <td width=60 align=center>Heute</td>
            <td width=60 align=center>Morgen</td>
        </tr>
"#;

const HTML_FOOT: &str = r#"
    </table>
    <p> <font size=-2>Erzeugt aus DWD Daten</font></p>
  </body>
</html>
"#;

/// A rendered pollen report, ready to be mailed
#[derive(Debug)]
pub struct Report {
    pub subject: String,
    pub html: String,
}

/// Renders the forecast for the configured sub-region into an html report.
/// An absent target region is an error, other regions are simply skipped.
///
/// # Arguments
///
/// * 'forecast' - the forecast snapshot to render
pub fn build_report(forecast: &PollenForecast) -> Result<Report, ReportError> {
    let updated = NaiveDateTime::parse_from_str(&forecast.last_update, UPDATE_FORMAT)
        .map_err(|e| ReportError::TimestampError(format!("last_update '{}': {}", forecast.last_update, e)))?
        .format(REPORT_FORMAT)
        .to_string();

    let region = forecast.content.iter()
        .find(|r| r.region_id == REGION_ID && r.partregion_id == PARTREGION_ID)
        .ok_or(ReportError::RegionNotFound(REGION_ID, PARTREGION_ID))?;

    let mut html = String::from(HTML_HEAD);
    html.push_str(&format!("<p>Pollenflugvorhersage vom {}Uhr</p>", updated));
    html.push_str(TABLE_HEAD);

    for (pollen, loads) in &region.pollen {
        html.push_str(&format!("        <tr><td>{}</td> ", pollen));
        for (day, load) in loads {
            match marker(load) {
                Some(m) => html.push_str(&format!("<td align=center>{}</td>", m)),
                None => {
                    warn!("unknown load code '{}' for {} on {}, rendering blank cell", load, pollen, day);
                    html.push_str("<td align=center></td>");
                }
            }
        }
        html.push_str("</tr>\n");
    }

    html.push_str(HTML_FOOT);

    Ok(Report {
        subject: format!("Pollenreport vom {}", updated),
        html,
    })
}

/// Returns the marker fragment for a load code, or None for an unknown code
///
/// # Arguments
///
/// * 'load' - load code as reported by DWD
fn marker(load: &str) -> Option<&'static str> {
    MARKERS.iter().find(|(code, _)| *code == load).map(|(_, m)| *m)
}

/// Error depicting errors that occur while rendering the report
///
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("TimestampError: {0}")]
    TimestampError(String),
    #[error("RegionNotFound: no forecast entry for region {0}, partregion {1}")]
    RegionNotFound(i64, i64),
}
