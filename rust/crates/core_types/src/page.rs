//! The fixed page table.

/// Text of the link back to the home page.
pub const HOME_LINK_LABEL: &str = "홈으로";

/// Message stored when a page fetch fails for any reason.
pub const FETCH_FAILED_MESSAGE: &str = "호출 실패";

/// One of the four API-backed pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Legal risk
    Law,
    /// Dispute type
    Boonjang,
    /// Similar precedents
    Yusa,
    /// Early risk
    Jogi,
}

impl Page {
    /// All pages, in navigation order.
    pub const ALL: [Page; 4] = [Page::Law, Page::Boonjang, Page::Yusa, Page::Jogi];

    /// Client-side route of the page.
    pub fn route(self) -> &'static str {
        match self {
            Page::Law => "/law",
            Page::Boonjang => "/boonjang",
            Page::Yusa => "/yusa",
            Page::Jogi => "/jogi",
        }
    }

    /// Backend endpoint fetched when the page mounts.
    pub fn endpoint(self) -> &'static str {
        match self {
            Page::Law => "/api/law",
            Page::Boonjang => "/api/boonjang",
            Page::Yusa => "/api/yusa",
            Page::Jogi => "/api/jogi",
        }
    }

    /// Heading shown at the top of the page.
    pub fn heading(self) -> &'static str {
        match self {
            Page::Law => "law",
            Page::Boonjang => "boonjang",
            Page::Yusa => "yusa",
            Page::Jogi => "jogi",
        }
    }

    /// Navigation link text, also shown under the heading.
    pub fn label(self) -> &'static str {
        match self {
            Page::Law => "법적위험페이지",
            Page::Boonjang => "분쟁유형페이지",
            Page::Yusa => "유사판례페이지",
            Page::Jogi => "조기위험페이지",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_matches_route() {
        for page in Page::ALL {
            assert_eq!(page.endpoint(), format!("/api{}", page.route()));
        }
    }

    #[test]
    fn test_navigation_order_and_labels() {
        let labels: Vec<_> = Page::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(
            labels,
            ["법적위험페이지", "분쟁유형페이지", "유사판례페이지", "조기위험페이지"]
        );
    }

    #[test]
    fn test_headings_are_distinct() {
        for (i, a) in Page::ALL.iter().enumerate() {
            for b in &Page::ALL[i + 1..] {
                assert_ne!(a.heading(), b.heading());
            }
        }
    }
}
