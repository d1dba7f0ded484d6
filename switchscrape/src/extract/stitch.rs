//! Multi-line record stitching.

/// Group lines into records that each begin with a record-start line.
///
/// A line accepted by `is_start` opens a new record; every following line is
/// appended verbatim to it until the next start or end of input. Lines seen
/// before the first start belong to no record and are dropped. The final
/// record is always emitted.
pub fn stitch_records<'a, I, P>(lines: I, mut is_start: P) -> Vec<Vec<&'a str>>
where
    I: IntoIterator<Item = &'a str>,
    P: FnMut(&str) -> bool,
{
    let mut records = Vec::new();
    let mut current: Option<Vec<&'a str>> = None;

    for line in lines {
        if is_start(line) {
            if let Some(done) = current.replace(vec![line]) {
                records.push(done);
            }
        } else if let Some(body) = current.as_mut() {
            body.push(line);
        }
    }

    records.extend(current);
    records
}
