pub fn current_time() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Makes sure the directory path ends with a separator.
pub fn sanitize_path(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{}/", path)
    }
}

pub fn output_file_path(dest_path: Option<&str>, timestamp: i64) -> String {
    let dir = dest_path.map(sanitize_path).unwrap_or_else(|| "./".to_string());
    format!("{}vouchers.{}.csv", dir, timestamp)
}
