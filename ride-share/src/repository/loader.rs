//! Loading the directory from CSV files on disk.

use std::fs::File;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::domain::Trip;

use super::records::{DriverRow, PassengerRow, TripRow, TripRowError};
use super::{RepositoryError, RideShare};

pub const DRIVERS_FILE: &str = "drivers.csv";
pub const PASSENGERS_FILE: &str = "passengers.csv";
pub const TRIPS_FILE: &str = "trips.csv";

impl RideShare {
    /// Load drivers, passengers and trips from a data directory.
    ///
    /// Expects `drivers.csv`, `passengers.csv` and `trips.csv`, each with a
    /// header row. Trips are connected in file order, so every driver's and
    /// passenger's trip list follows the order of `trips.csv`.
    ///
    /// # Errors
    ///
    /// Fails on the first unreadable file, malformed row, invalid record
    /// or dangling reference.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let dir = dir.as_ref();
        let mut ride_share = RideShare::new();

        for (line, row) in read_rows::<DriverRow>(&dir.join(DRIVERS_FILE))? {
            let driver = row
                .into_driver()
                .map_err(|source| RepositoryError::Validation {
                    file: DRIVERS_FILE,
                    line,
                    source,
                })?;
            ride_share.insert_driver(driver)?;
        }

        for (line, row) in read_rows::<PassengerRow>(&dir.join(PASSENGERS_FILE))? {
            let passenger = row
                .into_passenger()
                .map_err(|source| RepositoryError::Validation {
                    file: PASSENGERS_FILE,
                    line,
                    source,
                })?;
            ride_share.insert_passenger(passenger)?;
        }

        for (line, row) in read_rows::<TripRow>(&dir.join(TRIPS_FILE))? {
            let trip = row
                .into_new_trip()
                .and_then(|new| Trip::new(new).map_err(TripRowError::from))
                .map_err(|err| match err {
                    TripRowError::Timestamp(value) => RepositoryError::Timestamp {
                        file: TRIPS_FILE,
                        line,
                        value,
                    },
                    TripRowError::Validation(source) => RepositoryError::Validation {
                        file: TRIPS_FILE,
                        line,
                        source,
                    },
                })?;
            ride_share.connect_trip(trip)?;
        }

        info!(
            drivers = ride_share.drivers().count(),
            passengers = ride_share.passengers().count(),
            trips = ride_share.trips().len(),
            dir = %dir.display(),
            "loaded ride-share data"
        );

        Ok(ride_share)
    }
}

/// Read every row of a CSV file, paired with its line number.
fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<(u64, T)>, RepositoryError> {
    let csv_error = |source| RepositoryError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(|source| RepositoryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);
    let headers = reader.headers().map_err(csv_error)?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        let line = record.position().map_or(0, |p| p.line());
        let row = record.deserialize(Some(&headers)).map_err(csv_error)?;
        rows.push((line, row));
    }

    debug!(path = %path.display(), rows = rows.len(), "read data file");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use tempfile::{TempDir, tempdir};

    use super::*;
    use crate::domain::{DriverStatus, RecordId, ValidationError};

    const DRIVERS: &str = "\
id,name,vin,status
1,Bernardo Prosacco,WBWSS52P9NEYLVDE9,UNAVAILABLE
2,Emory Rosenbaum,1B9WEX2R92R12900E,AVAILABLE
";

    const PASSENGERS: &str = "\
id,name,phone_num
1,Nina Hintz Sr.,560.815.3059
2,Thena Pagac,(222) 736-3463
";

    const TRIPS: &str = "\
id,driver_id,passenger_id,start_time,end_time,cost,rating
1,1,1,2018-05-25 11:52:40 -0700,2018-05-25 12:25:00 -0700,10,5
2,2,1,2018-07-23 04:39:00 -0700,2018-07-23 04:55:00 -0700,5,3
3,1,2,2018-06-11 22:22:00 -0700,,,
";

    fn id(n: i64) -> RecordId {
        RecordId::new(n).unwrap()
    }

    fn write_dir(drivers: &str, passengers: &str, trips: &str) -> TempDir {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(DRIVERS_FILE), drivers).unwrap();
        std::fs::write(dir.path().join(PASSENGERS_FILE), passengers).unwrap();
        std::fs::write(dir.path().join(TRIPS_FILE), trips).unwrap();
        dir
    }

    #[test]
    fn loads_and_wires_everything() {
        let dir = write_dir(DRIVERS, PASSENGERS, TRIPS);
        let rs = RideShare::load(dir.path()).unwrap();

        assert_eq!(rs.drivers().count(), 2);
        assert_eq!(rs.passengers().count(), 2);
        assert_eq!(rs.trips().len(), 3);

        let driver = rs.driver(id(1)).unwrap();
        assert_eq!(driver.status(), DriverStatus::Unavailable);
        let trip_ids: Vec<_> = driver.trips().iter().map(|t| t.id().get()).collect();
        assert_eq!(trip_ids, vec![1, 3]);

        let passenger = rs.passenger(id(1)).unwrap();
        assert_eq!(passenger.trips().len(), 2);
        assert!((passenger.net_expenditures() - 15.0).abs() < 1e-9);
        let expected_secs = (32.0 * 60.0 + 20.0) + 16.0 * 60.0;
        assert!((passenger.total_time_spent() - expected_secs).abs() < 1e-9);
    }

    #[test]
    fn in_progress_trip_loaded_with_blank_cells() {
        let dir = write_dir(DRIVERS, PASSENGERS, TRIPS);
        let rs = RideShare::load(dir.path()).unwrap();

        let trip = rs.trip(id(3)).unwrap();
        assert!(trip.is_in_progress());
        assert_eq!(trip.cost(), None);
        assert_eq!(trip.rating(), None);

        let passenger = rs.passenger(id(2)).unwrap();
        assert_eq!(passenger.net_expenditures(), 0.0);
        assert_eq!(passenger.total_time_spent(), 0.0);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = RideShare::load(dir.path()).unwrap_err();
        match err {
            RepositoryError::Io { path, .. } => {
                assert_eq!(path, dir.path().join(DRIVERS_FILE));
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_vin_reports_line() {
        let drivers = "id,name,vin,status\n1,Short Vin,ABC,AVAILABLE\n";
        let dir = write_dir(drivers, PASSENGERS, TRIPS);
        let err = RideShare::load(dir.path()).unwrap_err();
        match err {
            RepositoryError::Validation { file, line, source } => {
                assert_eq!(file, DRIVERS_FILE);
                assert_eq!(line, 2);
                assert_eq!(source, ValidationError::InvalidVin { length: 3 });
            }
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_rating_rejected() {
        let trips = "\
id,driver_id,passenger_id,start_time,end_time,cost,rating
1,1,1,2018-05-25 11:52:40 -0700,2018-05-25 12:25:00 -0700,10,6
";
        let dir = write_dir(DRIVERS, PASSENGERS, trips);
        let err = RideShare::load(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            RepositoryError::Validation {
                file: TRIPS_FILE,
                source: ValidationError::InvalidRating(6),
                ..
            }
        ));
    }

    #[test]
    fn bad_timestamp_rejected() {
        let trips = "\
id,driver_id,passenger_id,start_time,end_time,cost,rating
1,1,1,last tuesday,2018-05-25 12:25:00 -0700,10,5
";
        let dir = write_dir(DRIVERS, PASSENGERS, trips);
        let err = RideShare::load(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            RepositoryError::Timestamp { line: 2, ref value, .. } if value == "last tuesday"
        ));
    }

    #[test]
    fn dangling_driver_rejected() {
        let trips = "\
id,driver_id,passenger_id,start_time,end_time,cost,rating
1,7,1,2018-05-25 11:52:40 -0700,2018-05-25 12:25:00 -0700,10,5
";
        let dir = write_dir(DRIVERS, PASSENGERS, trips);
        let err = RideShare::load(dir.path()).unwrap_err();
        assert!(matches!(err, RepositoryError::UnknownDriver { .. }));
    }

    #[test]
    fn malformed_row_is_csv_error() {
        let passengers = "id,name,phone_num\nnot-a-number,Someone,555\n";
        let dir = write_dir(DRIVERS, passengers, TRIPS);
        let err = RideShare::load(dir.path()).unwrap_err();
        match err {
            RepositoryError::Csv { path, .. } => {
                assert_eq!(path, dir.path().join(PASSENGERS_FILE));
            }
            other => panic!("expected Csv error, got {other:?}"),
        }
    }
}
