//! Test fixtures for the ingestion pipelines


/// Start list with a tie, a duplicate row, a decathlon and a relay
pub fn create_meet_start_list() -> String {
    r#";;StartList
001,1,Men 100 M Prelims 10:30 AM,,
Heat Lane Name
,,,
,,,
1,1234,Noah,Lyles,,SR,Florida,FLA Florida,10.20,,
2,2345,Fred,Kerley,,JR,Texas,TEX Texas,10.20,,
3,3456,Erriyon,Knighton,,SO,Tampa,TAM Tampa,10.50,,
4,1234,Noah,Lyles,,SR,Florida,FLA Florida,10.20,,
;;StartList
002,1,Dec Men 100 M Heats 9:00 AM,,
Heat Lane Name
,,,
,,,
1,5001,Ash,Eaton,,SR,Oregon,ORE Oregon,10.90,,8100
2,5002,Kev,Mayer,,JR,UCLA,UCLA,10.70,,7950
;;StartList
003,1,Dec Men Long Jump,,
Flight Name
,,,
,,,
1,5001,Ash,Eaton,,SR,Oregon,ORE Oregon,7.45m,,8100
;;StartList
004,1,Women 4x400 M Relay Finals,,
Heat Lane Team
,,,
,,,
1,,Yale,A,,,Yale University,YALE,3:30.00,,
2,,Duke,A,,,Duke University,DUKE,3:31.00,,
"#
    .to_string()
}

/// Result file for event 14 with the given status and rows
pub fn create_result_file(status: &str, rows: &[&str]) -> String {
    let mut content = format!(
        "014,1,Women 100 Meters,Finals,{},FAT,Sat,,Big Ten Outdoor Championships,May 16-18 2025,2025\n",
        status
    );
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    content
}
