//! Endpoint paths, relative to the configured base URL.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything but unreserved characters gets escaped inside a segment.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Join a route name and its scope segments: `route/seg1/seg2/`.
pub fn path(route: &str, segments: &[&str]) -> String {
    let mut out = String::from(route);
    for segment in segments {
        out.push('/');
        out.extend(utf8_percent_encode(segment, SEGMENT));
    }
    out.push('/');
    out
}

pub const LOGIN: &str = "login/";

pub const CONTACT_LIST_CREATE: &str = "contact-list-create";
pub const CONTACT_DETAIL: &str = "contact-detail";
pub const VISIT_LIST_CREATE: &str = "visit-list-create";
pub const VISIT_DETAIL: &str = "visit-detail";
pub const VISIT_CHECK_IN: &str = "visit-check-in";
pub const VISIT_CHECK_OUT: &str = "visit-check-out";
pub const ATTENDANCE_LIST: &str = "attendance-list";
pub const EMPLOYEE_LIST: &str = "employee-list";
pub const LEAVE_TYPES: &str = "leave-types";
pub const LEAVE_POLICIES: &str = "leave-policies";
pub const LEAVE_APPLICATIONS: &str = "leave-applications";
pub const SHIFTS: &str = "shifts";
pub const WEEK_OFFS: &str = "week-offs";
pub const LOCATIONS: &str = "locations";
pub const INVOICES: &str = "invoices";
pub const ORGANIZATION_ADMINS: &str = "organization-admins";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_joins_segments() {
        assert_eq!(path(CONTACT_LIST_CREATE, &["12"]), "contact-list-create/12/");
        assert_eq!(path(VISIT_CHECK_IN, &["12", "7", "99"]), "visit-check-in/12/7/99/");
    }

    #[test]
    fn test_segments_escaped() {
        assert_eq!(path(INVOICES, &["a/b c"]), "invoices/a%2Fb%20c/");
        assert_eq!(path(SHIFTS, &["x-1_y.z~"]), "shifts/x-1_y.z~/");
    }
}
