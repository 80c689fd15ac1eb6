//! Test utilities for block parser testing
//!
//! Sample start-list content and temporary file helpers shared by the
//! block parser test modules.

use std::io::Write;
use tempfile::NamedTempFile;


/// Two blocks: an individual sprint and a decathlon leg
pub fn create_test_start_list() -> String {
    r#";;StartList
001,1,Men 100 M Prelims 10:30 AM,,
Heat Lane Name Year School Seed
,,,,
,,,,
1,1234,Noah,Lyles,,SR,Florida,FLA Florida,10.05,,
2,2345,Fred,Kerley,,JR,Texas A&M,TAMU Texas A&M,10.20
N,Wind legal marks only
;;StartList
002,1,Dec Men Long Jump Finals,,
Flight Name Year School Seed
,,,,
,,,,
1,3456,Ashton,Eaton,,SR,Oregon,ORE Oregon,7.45m,,8100
"#
    .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
