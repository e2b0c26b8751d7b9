//! Text rendering of TourAPI results.
//!
//! Output is plain Korean text meant to be read by an agent, so the layout is
//! fixed: bracketed category label and title first, then labelled lines.

use once_cell::sync::Lazy;
use regex::Regex;

use super::content_type::label_for_code;
use super::model::{AreaCode, DetailRecord, TourItem, present};
use super::period::EventPeriod;

/// Rendered when `areaCode1` returns nothing.
pub const NO_AREA_CODES: &str = "조회된 지역코드가 없습니다.";

/// Rendered when a search returns nothing.
pub const NO_RESULTS: &str = "검색 결과가 없습니다.";

/// Rendered when the detail record is missing or has no title.
pub const NOT_FOUND: &str = "해당 콘텐츠 ID에 대한 정보를 찾을 수 없습니다.";

static MARKUP_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("MARKUP_TAG compile failure"));

/// `addr1`, followed by `addr2` after a space when it is non-empty.
pub fn compose_address(addr1: &str, addr2: &str) -> String {
    match present(addr2) {
        Some(addr2) => format!("{addr1} {addr2}"),
        None => addr1.to_string(),
    }
}

/// Remove every `<...>` tag.
pub fn strip_markup(text: &str) -> String {
    MARKUP_TAG.replace_all(text, "").into_owned()
}

/// One `[code] name` line per area.
pub fn format_area_codes(areas: &[AreaCode]) -> String {
    if areas.is_empty() {
        return NO_AREA_CODES.to_string();
    }
    areas
        .iter()
        .map(|area| format!("[{}] {}", area.code, area.name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One block per item, in upstream order.
pub fn format_tour_items(items: &[TourItem]) -> String {
    if items.is_empty() {
        return NO_RESULTS.to_string();
    }
    items
        .iter()
        .map(|item| {
            format!(
                "{} {}\n주소: {}\n콘텐츠ID: {}\n",
                label_for_code(&item.content_type_id),
                item.title,
                compose_address(&item.addr1, &item.addr2),
                item.content_id
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a detail record with its optional festival period.
pub fn format_detail(record: &DetailRecord, period: Option<&EventPeriod>) -> String {
    if record.title.is_empty() {
        return NOT_FOUND.to_string();
    }

    let mut out = format!(
        "{} {}\n",
        label_for_code(&record.content_type_id),
        record.title
    );

    if let Some(addr1) = present(&record.addr1) {
        out.push_str(&format!("주소: {}\n", compose_address(addr1, &record.addr2)));
    }

    if let Some(period) = period {
        out.push_str(&format!("\n축제 기간: {} ~ {}\n", period.start, period.end));
    }

    if let Some(tel) = present(&record.tel) {
        out.push_str(&format!("전화번호: {tel}\n"));
    }

    if let Some(homepage) = present(&record.homepage) {
        out.push_str(&format!("홈페이지: {}\n", strip_markup(homepage)));
    }

    if let Some(overview) = present(&record.overview) {
        out.push_str(&format!("\n개요:\n{}\n", strip_markup(overview)));
    }

    if let Some(image) = present(&record.first_image) {
        out.push_str(&format!("\n이미지 URL: {image}\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tour::testing::StubTourApi;

    fn gyeongbokgung() -> DetailRecord {
        DetailRecord {
            content_id: "126508".into(),
            content_type_id: "12".into(),
            title: "경복궁".into(),
            addr1: "서울특별시 종로구 사직로 161".into(),
            addr2: String::new(),
            tel: String::new(),
            homepage: "<a href=\"http://www.royalpalace.go.kr\" target=\"_blank\">http://www.royalpalace.go.kr</a>".into(),
            overview: "조선 왕조의 법궁이다.<br>1395년에 창건되었다.".into(),
            first_image: "http://tong.visitkorea.or.kr/cms/resource/33/2678633_image2_1.jpg".into(),
        }
    }

    #[test]
    fn test_compose_address() {
        assert_eq!(compose_address("A", ""), "A");
        assert_eq!(compose_address("A", "B"), "A B");
    }

    #[test]
    fn test_strip_markup() {
        assert_eq!(strip_markup("<b>굵게</b> 보통<br/>"), "굵게 보통");
        assert_eq!(strip_markup("태그 없음"), "태그 없음");
    }

    #[test]
    fn test_format_area_codes() {
        let areas = vec![StubTourApi::area("1", "서울"), StubTourApi::area("6", "부산")];
        assert_eq!(format_area_codes(&areas), "[1] 서울\n[6] 부산");
        assert_eq!(format_area_codes(&[]), NO_AREA_CODES);
    }

    #[test]
    fn test_format_tour_items_keeps_order_and_labels() {
        let items = vec![
            StubTourApi::item("2", "39", "자매국수", "제주특별자치도 제주시 항골남길 46", "(일도이동)"),
            StubTourApi::item("1", "76", "Jeju Olle", "제주특별자치도 서귀포시", ""),
        ];
        assert_eq!(
            format_tour_items(&items),
            "[음식점] 자매국수\n주소: 제주특별자치도 제주시 항골남길 46 (일도이동)\n콘텐츠ID: 2\n\
             \n[기타] Jeju Olle\n주소: 제주특별자치도 서귀포시\n콘텐츠ID: 1\n"
        );
    }

    #[test]
    fn test_format_tour_items_empty() {
        assert_eq!(format_tour_items(&[]), NO_RESULTS);
    }

    #[test]
    fn test_format_detail_full() {
        let text = format_detail(&gyeongbokgung(), None);
        assert_eq!(
            text,
            "[관광지] 경복궁\n\
             주소: 서울특별시 종로구 사직로 161\n\
             홈페이지: http://www.royalpalace.go.kr\n\
             \n개요:\n조선 왕조의 법궁이다.1395년에 창건되었다.\n\
             \n이미지 URL: http://tong.visitkorea.or.kr/cms/resource/33/2678633_image2_1.jpg\n"
        );
    }

    #[test]
    fn test_format_detail_with_period_and_phone() {
        let record = DetailRecord {
            content_type_id: "15".into(),
            title: "서울세계불꽃축제".into(),
            addr1: "서울특별시 영등포구 여의동로 330".into(),
            addr2: "(여의도동)".into(),
            tel: "1577-6677".into(),
            ..Default::default()
        };
        let period = EventPeriod {
            start: "2024-10-05".into(),
            end: "2024-10-05".into(),
        };
        assert_eq!(
            format_detail(&record, Some(&period)),
            "[축제/행사] 서울세계불꽃축제\n\
             주소: 서울특별시 영등포구 여의동로 330 (여의도동)\n\
             \n축제 기간: 2024-10-05 ~ 2024-10-05\n\
             전화번호: 1577-6677\n"
        );
    }

    #[test]
    fn test_format_detail_without_address() {
        let record = DetailRecord {
            content_type_id: "25".into(),
            title: "남도 여행코스".into(),
            ..Default::default()
        };
        assert_eq!(format_detail(&record, None), "[여행코스] 남도 여행코스\n");
    }

    #[test]
    fn test_format_detail_without_title() {
        let record = DetailRecord {
            addr1: "어딘가".into(),
            ..Default::default()
        };
        assert_eq!(format_detail(&record, None), NOT_FOUND);
    }
}
