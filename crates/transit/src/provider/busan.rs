//! Busan Metro lines 1-4.
//!
//! Segment times are in minutes. Lines 1 and 2 carry fewer times than
//! segments, so under the default truncating policy their last stations
//! (범어사, 노포 and 양산) are not part of the network.

use crate::models::types::*;
use crate::network::{
    BuildOptions, LineDefinition, Network, NetworkDefinition, NetworkStats, TransferDefinition,
};

/// Time to change lines at an interchange
pub const INTERCHANGE_MINUTES: Minutes = 5;

const LINE1_STATIONS: &[&str] = &[
    "다대포해수욕장",
    "다대포항",
    "낫개",
    "신장림",
    "장림",
    "동매",
    "신평",
    "하단",
    "당리",
    "사하",
    "괴정",
    "대티",
    "서대신",
    "동대신",
    "토성",
    "자갈치",
    "남포",
    "중앙",
    "부산역",
    "초량",
    "부산진",
    "좌천",
    "범일",
    "범내골",
    "서면",
    "부전",
    "양정",
    "시청",
    "연산",
    "교대",
    "동래",
    "명륜",
    "온천장",
    "부산대",
    "장전",
    "구서",
    "두실",
    "남산",
    "범어사",
    "노포",
];

const LINE1_MINUTES: &[Minutes] = &[
    3, 2, 3, 3, 2, 3, 3, 2, 2, 2, 3, 3, 2, 2, 2, 2, 2, 3, 2, 2, 2, 3, 3, 2, 2, 2, 2, 3, 2, 2, 3, 2,
    2, 3, 3, 2, 2,
];

const LINE2_STATIONS: &[&str] = &[
    "장산",
    "중동",
    "해운대",
    "동백",
    "벡스코",
    "센텀시티",
    "민락",
    "수영",
    "광안",
    "금련산",
    "남천",
    "경성대부경대",
    "대연",
    "못골",
    "지게골",
    "문현",
    "국제금융센터부산은행",
    "전포",
    "서면",
    "부암",
    "가야",
    "동의대",
    "개금",
    "냉정",
    "주례",
    "감전",
    "사상",
    "덕포",
    "모덕",
    "모라",
    "구남",
    "구명",
    "덕천",
    "수정",
    "화명",
    "율리",
    "동원",
    "금곡",
    "호포",
    "증산",
    "부산대양산캠퍼스",
    "남양산",
    "양산",
];

const LINE2_MINUTES: &[Minutes] = &[
    2, 2, 3, 2, 3, 2, 2, 2, 3, 2, 2, 3, 2, 2, 2, 3, 2, 2, 2, 2, 3, 2, 3, 2, 2, 2, 3, 2, 3, 2, 2, 3,
    2, 3, 2, 3, 3, 3, 2, 2, 3,
];

const LINE3_STATIONS: &[&str] = &[
    "수영",
    "망미",
    "배산",
    "물만골",
    "연산",
    "종합운동장",
    "사직",
    "미남",
    "만덕",
    "남산정",
    "숙등",
    "덕천",
    "구포",
    "강서구청",
    "체육공원",
    "대저",
];

const LINE3_MINUTES: &[Minutes] = &[2, 3, 2, 2, 3, 3, 2, 3, 3, 2, 3, 3, 2, 3, 2];

const LINE4_STATIONS: &[&str] = &[
    "미남",
    "동래",
    "수안",
    "낙민",
    "충렬사",
    "명장",
    "서동",
    "금사",
    "반여농산물시장",
    "석대",
    "영산대",
    "반여",
    "재송",
    "센텀",
];

const LINE4_MINUTES: &[Minutes] = &[3, 2, 2, 3, 2, 2, 3, 2, 2, 3, 3, 2, 2];

const INTERCHANGES: &[&str] = &[
    "서면", // 1-2
    "덕천", // 2-3
    "미남", // 3-4
    "동래", // 1-4
];

/// The raw line and transfer tables
pub fn definition() -> NetworkDefinition {
    let lines = [
        ("Line 1", LINE1_STATIONS, LINE1_MINUTES),
        ("Line 2", LINE2_STATIONS, LINE2_MINUTES),
        ("Line 3", LINE3_STATIONS, LINE3_MINUTES),
        ("Line 4", LINE4_STATIONS, LINE4_MINUTES),
    ]
    .into_iter()
    .map(|(name, stations, minutes)| {
        LineDefinition::new(name, stations.iter().copied(), minutes.to_vec())
    })
    .collect();

    let transfers = INTERCHANGES
        .iter()
        .map(|station| TransferDefinition::interchange(*station, INTERCHANGE_MINUTES))
        .collect();

    NetworkDefinition { lines, transfers }
}

/// Build the network with the default (truncating) options
pub fn network() -> Result<(Network, NetworkStats)> {
    definition().build(BuildOptions::default())
}
