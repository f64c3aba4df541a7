//! Tests for reading the bootstrap offset off a contribution graph page

#[cfg(test)]
mod tests {
    use graphart::GraphArtError;
    use graphart::cycle::machine::PositionResolver;
    use graphart::remote::github::http_agent;
    use graphart::remote::graph::{
        ContributionGraphResolver, FixedOffset, count_dated_cells, offset_from_html,
    };
    use std::fmt::Write as _;
    use std::thread::JoinHandle;

    use crate::remote::serve_once;

    /// Page in the older SVG layout with `cells` dated days
    fn svg_page(cells: usize) -> String {
        let mut html = String::from("<html><body><svg><g>");
        for day in 0..cells {
            let _ = write!(
                html,
                "<rect class=\"day\" data-date=\"2020-01-{:02}\" data-count=\"0\"></rect>",
                day % 28 + 1
            );
        }
        html.push_str("</g></svg></body></html>");
        html
    }

    fn serve_html(status: &str, body: String) -> (String, JoinHandle<String>) {
        serve_once(status, "text/html", body)
    }

    // Tests dated cells are counted in both graph layouts
    #[test]
    fn test_count_dated_cells() {
        assert_eq!(count_dated_cells(&svg_page(12)).unwrap(), 12);

        let table = "<table><tbody><tr>\
            <td class=\"ContributionCalendar-day\" data-date=\"2024-01-01\"></td>\
            <td class=\"ContributionCalendar-day\" data-date=\"2024-01-02\"></td>\
            <td class=\"ContributionCalendar-day\"></td>\
            <td class=\"other\" data-date=\"2024-01-03\"></td>\
            </tr></tbody></table>";
        assert_eq!(count_dated_cells(table).unwrap(), 2);
    }

    // Tests the offset is the cell count modulo a week
    // Verified by dividing instead of taking the remainder
    #[test]
    fn test_offset_is_weekday_remainder() {
        assert_eq!(offset_from_html(&svg_page(7)).unwrap(), 0);
        assert_eq!(offset_from_html(&svg_page(10)).unwrap(), 3);
        assert_eq!(offset_from_html(&svg_page(371)).unwrap(), 0);
        assert_eq!(offset_from_html(&svg_page(366)).unwrap(), 2);
    }

    // Tests a page without cells anchors at the top of a column
    #[test]
    fn test_empty_page_is_zero() {
        assert_eq!(offset_from_html("<html></html>").unwrap(), 0);
        assert_eq!(offset_from_html("").unwrap(), 0);
    }

    // Tests the resolver fetches the account's graph page
    #[test]
    fn test_resolver_fetches_page() {
        let (base, server) = serve_html("200 OK", svg_page(9));
        let resolver = ContributionGraphResolver::new(http_agent(), &base, "octo cat", "t0k3n");

        let offset = resolver.resolve_offset().unwrap();
        let request = server.join().unwrap();

        assert_eq!(offset, 2);
        assert!(request.starts_with("GET /users/octo%20cat/contributions"));
    }

    // Tests a failing page is a bootstrap error
    #[test]
    fn test_resolver_server_error() {
        let (base, server) = serve_html("500 Internal Server Error", String::from("oops"));
        let resolver = ContributionGraphResolver::new(http_agent(), &base, "octo", "t0k3n");

        let result = resolver.resolve_offset();
        server.join().unwrap();

        assert!(matches!(
            result,
            Err(GraphArtError::BootstrapResolution { .. })
        ));
    }

    // Tests the page address trims a trailing slash
    #[test]
    fn test_resolver_url() {
        let resolver =
            ContributionGraphResolver::new(http_agent(), "https://github.com/", "octo", "t0k3n");

        assert_eq!(resolver.url(), "https://github.com/users/octo/contributions");
    }

    // Tests a fixed resolver returns its value, including zero
    #[test]
    fn test_fixed_offset() {
        assert_eq!(FixedOffset(0).resolve_offset().unwrap(), 0);
        assert_eq!(FixedOffset(5).resolve_offset().unwrap(), 5);
    }
}
