#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1,2017-01-02 08:10:00,2017-01-02 08:20:00,600,Clark St & Elm St,Wells St & Huron St,Subscriber,Male,1985.0
2,2017-01-02 08:40:00,2017-01-02 08:50:00,600,Clark St & Elm St,Wells St & Huron St,Subscriber,Female,1990.0
3,2017-01-09 08:05:00,2017-01-09 08:25:00,1200,Clark St & Elm St,Wells St & Huron St,Customer,,
4,2017-03-15 17:20:00,2017-03-15 17:25:00,300,Streeter Dr & Grand Ave,Streeter Dr & Grand Ave,Customer,Male,1985.0
5,2017-03-15 17:50:00,2017-03-15 18:05:00,900,Streeter Dr & Grand Ave,Streeter Dr & Grand Ave,Subscriber,Male,1972.0
6,2017-06-01 12:00:00,2017-06-01 13:00:00,3600,Lake Shore Dr & Monroe St,Clark St & Elm St,Subscriber,Female,2000.0
";

pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1,2017-04-03 07:00:00,2017-04-03 07:08:09,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
2,2017-04-04 07:30:00,2017-04-04 07:46:40,1000,14th & Belmont St NW,15th & K St NW,Customer
";

/// Binary under test, with HOME pointed at an empty per-test directory so no
/// user configuration is picked up.
pub fn rbs(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rbikeshare");
    cmd.env("HOME", temp_home(name));
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Fresh HOME directory for one test
pub fn temp_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rbikeshare_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp home");
    path
}

/// Data directory holding the chicago and washington fixtures
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rbikeshare_data", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create data dir");
    fs::write(path.join("chicago.csv"), CHICAGO_CSV).expect("write chicago.csv");
    fs::write(path.join("washington.csv"), WASHINGTON_CSV).expect("write washington.csv");
    path.to_string_lossy().to_string()
}
