//! Test utilities for result file parsing

use std::io::Write;
use tempfile::NamedTempFile;

mod metadata_row_tests;
mod rows_tests;

pub const METADATA_100M: &str = "014,1,Women 100 Meters,Finals,Scored,FAT,Sat 3:00 PM,Wind +1.2,Big Ten Outdoor Championships,May 16-18 2025,2025,Columbus OH";

/// Standard layout result file for a women's 100 m final
pub fn create_test_result_file() -> String {
    format!(
        "{}\n\
1,Ana,Lee,101,SR,YALE,Yale,11.20,11.196,Q,1.2,1,4\n\
2,Bo,Kim,102,JR,DUKE,Duke,11.35,,q,1.2,1,5\n\
3,\"Cruz, Jr.\",Mia,,FR,RICE,Rice,11.35\n\
DNS,Dee,Fox,104,SO,YALE,Yale,DNS\n",
        METADATA_100M
    )
}

/// Combined-event file without a gender word
pub fn create_test_multi_file(meet_name: &str, event_name: &str) -> String {
    format!(
        "030,1,{},Finals,Official,,Sun,,{},Jun 1 2025,2025\n\
1,Ash,Eaton,201,SR,ORE,Oregon,8100,\n\
2,Kev,Mayer,202,JR,UCLA,UCLA,7950,150\n",
        event_name, meet_name
    )
}

pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
