use std::cmp::min;

/// The minimum number of single character insertions, deletions
/// and substitutions turning `a` into `b` (Levenshtein distance).
///
/// Symmetric under swapping the inputs; the longer string is put on
/// the outer loop only to keep the working row as short as possible.
/// The distance with an empty string is the length of the other one.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let mut outer: Vec<char> = a.chars().collect();
    let mut inner: Vec<char> = b.chars().collect();
    if outer.len() < inner.len() {
        std::mem::swap(&mut outer, &mut inner);
    }

    let mut previous_row: Vec<usize> = (0..=inner.len()).collect();
    for (row, outer_char) in outer.iter().enumerate() {
        let mut current_row = Vec::with_capacity(inner.len() + 1);
        current_row.push(row + 1);

        for (column, inner_char) in inner.iter().enumerate() {
            let insertion = previous_row[column + 1] + 1;
            let deletion = current_row[column] + 1;
            let substitution = previous_row[column] + (outer_char != inner_char) as usize;

            current_row.push(min(min(insertion, deletion), substitution));
        }

        previous_row = current_row;
    }

    previous_row[inner.len()]
}
