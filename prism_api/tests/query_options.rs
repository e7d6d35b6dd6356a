use prism_api::{ListOptions, SortOrder};
use serde_json::json;

#[test]
fn default_options_serialize_empty() {
    let body = serde_json::to_value(ListOptions::default()).unwrap();
    assert_eq!(body, json!({}));
}

#[test]
fn by_name_builds_an_equality_filter() {
    let options = ListOptions::by_name("vm_name", "web-01");
    assert_eq!(options.filter.as_deref(), Some("vm_name==web-01"));
}

#[test]
fn full_options() {
    let options = ListOptions::default()
        .with_filter("power_state==on")
        .with_length(50)
        .with_offset(100)
        .with_sort("memory_size_mib", SortOrder::Descending);
    insta::assert_json_snapshot!(options, @r###"
    {
      "filter": "power_state==on",
      "length": 50,
      "offset": 100,
      "sort_attribute": "memory_size_mib",
      "sort_order": "DESCENDING"
    }
    "###);
}

#[test]
fn sort_order_parsing() {
    assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Descending);
    assert_eq!("ASCENDING".parse::<SortOrder>().unwrap(), SortOrder::Ascending);
    assert!("sideways".parse::<SortOrder>().is_err());
    assert_eq!(SortOrder::default().to_string(), "ASCENDING");
}
