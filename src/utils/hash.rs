/// Calculate the MD5 digest of an in-memory buffer as lowercase hex.
///
/// The digest is used for change detection against the value stored on the
/// remote object, not for integrity against tampering.
pub fn calculate_md5(data: &[u8]) -> String {
    format!("{:x}", md5::compute(data))
}
