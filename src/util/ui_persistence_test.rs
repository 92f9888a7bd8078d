use super::*;

#[test]
fn storage_key_is_namespaced() {
    assert_eq!(storage_key("margins"), "civil_margins");
}

#[test]
fn decode_reads_valid_json() {
    assert_eq!(decode::<bool>("true"), Some(true));
    assert_eq!(decode::<u8>("3"), Some(3));
}

#[test]
fn decode_treats_corrupt_values_as_absent() {
    assert_eq!(decode::<bool>("yes"), None);
    assert_eq!(decode::<u8>(""), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_and_save_noop_without_browser() {
    save_json("flag", &true);
    assert_eq!(load_json::<bool>("flag"), None);
}
