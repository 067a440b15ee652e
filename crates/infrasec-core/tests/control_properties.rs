//! Property tests for control identifiers and status parsing.

use infrasec_core::{ControlId, ControlStatus, OTHER_DOMAIN};
use proptest::prelude::*;

proptest! {
    #[test]
    fn domain_is_prefix_before_first_dot(
        prefix in "[A-Za-z]{1,4}",
        rest in "[0-9]{1,3}(\\.[0-9]{1,3}){0,3}",
    ) {
        let id = ControlId::new(format!("{prefix}.{rest}")).unwrap();
        prop_assert_eq!(id.domain(), prefix.as_str());
    }

    #[test]
    fn dotless_ids_fall_into_other(raw in "[A-Za-z0-9_-]{1,12}") {
        let id = ControlId::new(&raw).unwrap();
        prop_assert_eq!(id.domain(), OTHER_DOMAIN);
    }

    #[test]
    fn status_parse_ignores_case(idx in 0usize..3, upper in any::<bool>()) {
        let status = ControlStatus::all()[idx];
        let label = if upper {
            status.as_str().to_uppercase()
        } else {
            status.as_str().to_lowercase()
        };
        prop_assert_eq!(label.parse::<ControlStatus>().unwrap(), status);
    }
}
