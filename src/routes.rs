//! Per-family route tables: which time-series field backs each table row.
//!
//! Labels are the exact strings the crawler writes into `table_data` (minus
//! the family prefix); field names are the exact keys it writes into
//! `chart_data`. A `None` field means the route intentionally has no chart
//! series, which is distinct from a label that is missing from the table
//! altogether (a data bug, surfaced as a warning by the dataset builder).

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexFamily {
    Kcci,
    Scfi,
    Wci,
    Iaci,
    BlankSailing,
    Fbx,
    Xsi,
    Mbci,
}

impl IndexFamily {
    pub const ALL: [IndexFamily; 8] = [
        IndexFamily::Kcci,
        IndexFamily::Scfi,
        IndexFamily::Wci,
        IndexFamily::Iaci,
        IndexFamily::BlankSailing,
        IndexFamily::Fbx,
        IndexFamily::Xsi,
        IndexFamily::Mbci,
    ];

    /// Section key used in the artifact and as the route prefix.
    pub fn key(self) -> &'static str {
        match self {
            IndexFamily::Kcci => "KCCI",
            IndexFamily::Scfi => "SCFI",
            IndexFamily::Wci => "WCI",
            IndexFamily::Iaci => "IACI",
            IndexFamily::BlankSailing => "BLANK_SAILING",
            IndexFamily::Fbx => "FBX",
            IndexFamily::Xsi => "XSI",
            IndexFamily::Mbci => "MBCI",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            IndexFamily::Kcci => "KCCI (Korea Container Composite Index)",
            IndexFamily::Scfi => "SCFI (Shanghai Containerized Freight Index)",
            IndexFamily::Wci => "WCI (World Container Index)",
            IndexFamily::Iaci => "IACI (Intra-Asia Container Index)",
            IndexFamily::BlankSailing => "Blank Sailings by Alliance",
            IndexFamily::Fbx => "FBX (Freightos Baltic Index)",
            IndexFamily::Xsi => "XSI (Xeneta Shipping Index)",
            IndexFamily::Mbci => "MBCI (Maersk Brokers Charter Index)",
        }
    }

    pub fn chart_mount(self) -> &'static str {
        match self {
            IndexFamily::Kcci => "kcci-chart",
            IndexFamily::Scfi => "scfi-chart",
            IndexFamily::Wci => "wci-chart",
            IndexFamily::Iaci => "iaci-chart",
            IndexFamily::BlankSailing => "blank-sailing-chart",
            IndexFamily::Fbx => "fbx-chart",
            IndexFamily::Xsi => "xsi-chart",
            IndexFamily::Mbci => "mbci-chart",
        }
    }

    pub fn table_mount(self) -> &'static str {
        match self {
            IndexFamily::Kcci => "kcci-table",
            IndexFamily::Scfi => "scfi-table",
            IndexFamily::Wci => "wci-table",
            IndexFamily::Iaci => "iaci-table",
            IndexFamily::BlankSailing => "blank-sailing-table",
            IndexFamily::Fbx => "fbx-table",
            IndexFamily::Xsi => "xsi-table",
            IndexFamily::Mbci => "mbci-table",
        }
    }

    /// Route label that denotes the family's aggregate index, drawn with a
    /// thicker line. XSI publishes no composite series.
    pub fn composite_marker(self) -> Option<&'static str> {
        match self {
            IndexFamily::Kcci
            | IndexFamily::Scfi
            | IndexFamily::Wci
            | IndexFamily::Iaci
            | IndexFamily::Fbx => Some("종합지수"),
            IndexFamily::BlankSailing => Some("Total"),
            IndexFamily::Mbci => Some("MBCI"),
            IndexFamily::Xsi => None,
        }
    }
}

/// Outcome of resolving a route label against a family's table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Field(&'static str),
    /// Intentionally no chart series for this route.
    Excluded,
}

pub struct RouteKeyMap {
    entries: &'static [(&'static str, Option<&'static str>)],
}

impl RouteKeyMap {
    pub const fn new(entries: &'static [(&'static str, Option<&'static str>)]) -> Self {
        Self { entries }
    }

    pub fn for_family(family: IndexFamily) -> &'static RouteKeyMap {
        match family {
            IndexFamily::Kcci => &KCCI,
            IndexFamily::Scfi => &SCFI,
            IndexFamily::Wci => &WCI,
            IndexFamily::Iaci => &IACI,
            IndexFamily::BlankSailing => &BLANK_SAILING,
            IndexFamily::Fbx => &FBX,
            IndexFamily::Xsi => &XSI,
            IndexFamily::Mbci => &MBCI,
        }
    }

    /// `None` means the label is unmapped (a data bug upstream); callers
    /// log it. Never panics.
    pub fn resolve(&self, label: &str) -> Option<Resolution> {
        self.entries.iter().find(|(key, _)| *key == label).map(
            |(_, field)| match *field {
                Some(field) => Resolution::Field(field),
                None => Resolution::Excluded,
            },
        )
    }
}

static KCCI: RouteKeyMap = RouteKeyMap::new(&[
    ("종합지수", Some("KCCI_종합지수")),
    ("미주서안", Some("KCCI_미주서안")),
    ("미주동안", Some("KCCI_미주동안")),
    ("유럽", Some("KCCI_유럽")),
    ("지중해", Some("KCCI_지중해")),
    ("중동", Some("KCCI_중동")),
    ("호주", Some("KCCI_호주")),
    ("남미동안", Some("KCCI_남미동안")),
    ("남미서안", Some("KCCI_남미서안")),
    ("남아프리카", Some("KCCI_남아프리카")),
    ("서아프리카", Some("KCCI_서아프리카")),
    ("중국", Some("KCCI_중국")),
    ("일본", Some("KCCI_일본")),
    ("동남아시아", Some("KCCI_동남아시아")),
]);

// SCFI table labels carry the quoting port; the series keys do not.
static SCFI: RouteKeyMap = RouteKeyMap::new(&[
    ("종합지수", Some("SCFI_종합지수")),
    ("유럽 (기본항)", Some("SCFI_북유럽")),
    ("지중해 (기본항)", Some("SCFI_지중해")),
    ("미주서안 (기본항)", Some("SCFI_미주서안")),
    ("미주동안 (기본항)", Some("SCFI_미주동안")),
    ("페르시아만/홍해 (두바이)", Some("SCFI_중동")),
    ("호주/뉴질랜드 (멜버른)", Some("SCFI_호주/뉴질랜드")),
    ("동/서 아프리카 (라고스)", Some("SCFI_동부/서부 아프리카")),
    ("남아프리카 (더반)", Some("SCFI_남아공")),
    ("서일본 (기본항)", Some("SCFI_일본서안")),
    ("동일본 (기본항)", Some("SCFI_일본동안")),
    ("동남아시아 (싱가포르)", Some("SCFI_동남아시아")),
    ("한국 (부산)", Some("SCFI_한국")),
    ("중남미서안 (만사니요)", Some("SCFI_남아메리카")),
]);

static WCI: RouteKeyMap = RouteKeyMap::new(&[
    ("종합지수", Some("WCI_종합지수")),
    ("상하이 → 로테르담", Some("WCI_상하이 → 로테르담")),
    ("로테르담 → 상하이", Some("WCI_로테르담 → 상하이")),
    ("상하이 → 제노바", Some("WCI_상하이 → 제노바")),
    ("상하이 → 로스엔젤레스", Some("WCI_상하이 → 로스엔젤레스")),
    ("로스엔젤레스 → 상하이", Some("WCI_로스엔젤레스 → 상하이")),
    ("상하이 → 뉴욕", Some("WCI_상하이 → 뉴욕")),
    ("뉴욕 → 로테르담", Some("WCI_뉴욕 → 로테르담")),
    ("로테르담 → 뉴욕", Some("WCI_로테르담 → 뉴욕")),
]);

static IACI: RouteKeyMap = RouteKeyMap::new(&[("종합지수", Some("IACI_종합지수"))]);

static BLANK_SAILING: RouteKeyMap = RouteKeyMap::new(&[
    ("Gemini Cooperation", Some("BLANK_SAILING_Gemini_Cooperation")),
    ("MSC", Some("BLANK_SAILING_MSC")),
    ("OCEAN Alliance", Some("BLANK_SAILING_OCEAN_Alliance")),
    ("Premier Alliance", Some("BLANK_SAILING_Premier_Alliance")),
    ("Others/Independent", Some("BLANK_SAILING_Others_Independent")),
    ("Total", Some("BLANK_SAILING_종합지수")),
]);

static FBX: RouteKeyMap = RouteKeyMap::new(&[
    ("종합지수", Some("FBX_종합지수")),
    ("중국/동아시아 → 미주서안", Some("FBX_중국/동아시아 → 미주서안")),
    ("미주서안 → 중국/동아시아", Some("FBX_미주서안 → 중국/동아시아")),
    ("중국/동아시아 → 미주동안", Some("FBX_중국/동아시아 → 미주동안")),
    ("미주동안 → 중국/동아시아", Some("FBX_미주동안 → 중국/동아시아")),
    ("중국/동아시아 → 북유럽", Some("FBX_중국/동아시아 → 북유럽")),
    ("북유럽 → 중국/동아시아", Some("FBX_북유럽 → 중국/동아시아")),
    ("중국/동아시아 → 지중해", Some("FBX_중국/동아시아 → 지중해")),
    ("지중해 → 중국/동아시아", Some("FBX_지중해 → 중국/동아시아")),
    ("미주동안 → 북유럽", Some("FBX_미주동안 → 북유럽")),
    ("북유럽 → 미주동안", Some("FBX_북유럽 → 미주동안")),
    ("유럽 → 남미동안", Some("FBX_유럽 → 남미동안")),
    ("유럽 → 남미서안", Some("FBX_유럽 → 남미서안")),
]);

static XSI: RouteKeyMap = RouteKeyMap::new(&[
    ("동아시아 → 북유럽", Some("XSI_동아시아 → 북유럽")),
    ("북유럽 → 동아시아", Some("XSI_북유럽 → 동아시아")),
    ("동아시아 → 미주서안", Some("XSI_동아시아 → 미주서안")),
    ("미주서안 → 동아시아", Some("XSI_미주서안 → 동아시아")),
    ("동아시아 → 남미동안", Some("XSI_동아시아 → 남미동안")),
    ("북유럽 → 미주동안", Some("XSI_북유럽 → 미주동안")),
    ("미주동안 → 북유럽", Some("XSI_미주동안 → 북유럽")),
    ("북유럽 → 남미동안", Some("XSI_북유럽 → 남미동안")),
]);

static MBCI: RouteKeyMap = RouteKeyMap::new(&[("MBCI", Some("MBCI_종합지수"))]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_family_resolves_its_composite_marker() {
        for family in IndexFamily::ALL {
            let Some(marker) = family.composite_marker() else {
                continue;
            };
            let map = RouteKeyMap::for_family(family);
            assert!(
                matches!(map.resolve(marker), Some(Resolution::Field(_))),
                "{} composite marker unresolved",
                family.key()
            );
        }
    }

    #[test]
    fn scfi_port_labels_map_to_bare_series_keys() {
        let map = RouteKeyMap::for_family(IndexFamily::Scfi);
        assert_eq!(
            map.resolve("유럽 (기본항)"),
            Some(Resolution::Field("SCFI_북유럽"))
        );
        assert_eq!(
            map.resolve("중남미서안 (만사니요)"),
            Some(Resolution::Field("SCFI_남아메리카"))
        );
    }

    #[test]
    fn blank_sailing_total_maps_to_composite_series() {
        let map = RouteKeyMap::for_family(IndexFamily::BlankSailing);
        assert_eq!(
            map.resolve("Total"),
            Some(Resolution::Field("BLANK_SAILING_종합지수"))
        );
    }

    #[test]
    fn unknown_label_resolves_to_none() {
        let map = RouteKeyMap::for_family(IndexFamily::Kcci);
        assert_eq!(map.resolve("발트해"), None);
    }

    #[test]
    fn excluded_entries_are_distinct_from_unmapped() {
        static MAP: RouteKeyMap = RouteKeyMap::new(&[("chartless", None)]);
        assert_eq!(MAP.resolve("chartless"), Some(Resolution::Excluded));
        assert_eq!(MAP.resolve("missing"), None);
    }

    #[test]
    fn family_keys_and_mounts_are_unique() {
        let keys: std::collections::HashSet<_> =
            IndexFamily::ALL.iter().map(|f| f.key()).collect();
        let mounts: std::collections::HashSet<_> =
            IndexFamily::ALL.iter().map(|f| f.chart_mount()).collect();
        assert_eq!(keys.len(), 8);
        assert_eq!(mounts.len(), 8);
    }
}
