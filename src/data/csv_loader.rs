//! CSV loading for rider entry tables
//!
//! Expected columns:
//! `no,name,home,handicap_m,avg_st,avg_race_time,recent_in2,dry_in2,wet_in2`
//!
//! Rates are entered as fractions in 0..1 (57.1% -> 0.571), matching the
//! program sheet. The name column may be empty or missing entirely.

use polars::prelude::*;
use std::path::Path;

use crate::models::Rider;

/// Load a rider table from a CSV file
pub fn load_riders<P: AsRef<Path>>(csv_path: P) -> Result<Vec<Rider>, PolarsError> {
    let df = CsvReadOptions::default()
        .try_into_reader_with_file_path(Some(csv_path.as_ref().to_path_buf()))?
        .finish()?;

    dataframe_to_riders(&df)
}

/// Convert DataFrame to Rider vector
fn dataframe_to_riders(df: &DataFrame) -> Result<Vec<Rider>, PolarsError> {
    let mut riders = Vec::with_capacity(df.height());

    // Use i64 for all integer columns (polars default inference)
    let no_col = df.column("no")?.i64()?;
    let home_col = df.column("home")?.str()?;
    let handicap_col = df.column("handicap_m")?.i64()?;
    let avg_st_col = df.column("avg_st")?.f64()?;
    let avg_race_time_col = df.column("avg_race_time")?.f64()?;
    let recent_col = df.column("recent_in2")?.f64()?;
    let dry_col = df.column("dry_in2")?.f64()?;
    let wet_col = df.column("wet_in2")?.f64()?;

    // Optional column; an all-empty name column may infer as non-string
    let name_col = df.column("name").ok().and_then(|c| c.str().ok());

    for i in 0..df.height() {
        riders.push(Rider {
            no: no_col.get(i).unwrap_or(0) as u8,
            name: name_col
                .and_then(|c| c.get(i))
                .unwrap_or("")
                .to_string(),
            home: home_col.get(i).unwrap_or("").to_string(),
            handicap_m: handicap_col.get(i).unwrap_or(0) as u32,
            avg_st: avg_st_col.get(i).unwrap_or(0.0),
            avg_race_time: avg_race_time_col.get(i).unwrap_or(0.0),
            recent_in2_rate: recent_col.get(i).unwrap_or(0.0),
            dry_in2_rate: dry_col.get(i).unwrap_or(0.0),
            wet_in2_rate: wet_col.get(i).unwrap_or(0.0),
        });
    }

    Ok(riders)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const SAMPLE_CSV: &str = "\
no,name,home,handicap_m,avg_st,avg_race_time,recent_in2,dry_in2,wet_in2
1,,川口,0,0.19,3.472,0.60,0.45,0.25
2,,川口,10,0.18,3.462,0.70,0.33,0.57
3,,飯塚,10,0.23,3.459,0.60,0.47,0.00
";

    #[test]
    fn test_load_riders_from_csv() {
        let path = std::env::temp_dir().join("velobi_csv_loader_test.csv");
        fs::write(&path, SAMPLE_CSV).unwrap();

        let riders = load_riders(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(riders.len(), 3);

        assert_eq!(riders[0].no, 1);
        assert_eq!(riders[0].home, "川口");
        assert_eq!(riders[0].handicap_m, 0);
        assert!((riders[0].avg_st - 0.19).abs() < 1e-9);
        assert!((riders[0].avg_race_time - 3.472).abs() < 1e-9);
        assert!((riders[0].recent_in2_rate - 0.60).abs() < 1e-9);

        assert_eq!(riders[2].no, 3);
        assert_eq!(riders[2].home, "飯塚");
        assert!((riders[2].wet_in2_rate - 0.00).abs() < 1e-9);
    }

    #[test]
    fn test_load_riders_missing_file() {
        let result = load_riders("/nonexistent/riders.csv");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_riders_with_names() {
        let csv = "\
no,name,home,handicap_m,avg_st,avg_race_time,recent_in2,dry_in2,wet_in2
5,試験走者,山陽,20,0.15,3.445,0.70,0.48,0.31
";
        let path = std::env::temp_dir().join("velobi_csv_loader_names_test.csv");
        fs::write(&path, csv).unwrap();

        let riders = load_riders(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(riders.len(), 1);
        assert_eq!(riders[0].name, "試験走者");
        assert_eq!(riders[0].home, "山陽");
    }
}
