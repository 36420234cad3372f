use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Two-column listing with the left column padded to its widest cell.
pub fn print_table(left: &str, right: &str, rows: &[(&str, &str)]) {
    let width = rows
        .iter()
        .map(|(l, _)| l.len())
        .chain(std::iter::once(left.len()))
        .max()
        .unwrap_or(0);
    println!("{:width$}  {}", left, right);
    println!("{}  {}", "-".repeat(width), "-".repeat(right.len()));
    for (l, r) in rows {
        println!("{:width$}  {}", l, r);
    }
}
