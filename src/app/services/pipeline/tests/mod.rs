//! Tests for the activity pipeline


/// Two bikes sharing station 1, plus bike 3 riding from station 2 to station 5
pub fn create_fleet_csv() -> String {
    "1,1,,20200101T10:00:00\n\
     1,1,20200101T10:30:00,20200101T11:00:00\n\
     1,1,20200101T11:10:00,\n\
     1,2,,20200101T09:00:00\n\
     1,2,20200101T10:01:05,\n\
     2,3,,20200101T08:00:00\n\
     5,3,20200101T08:45:00,\n"
        .to_string()
}
