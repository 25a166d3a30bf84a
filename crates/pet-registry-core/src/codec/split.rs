//! Quote-aware splitting of a single CSV line.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Only whitespace seen so far in this cell
    Start,
    Unquoted,
    Quoted,
    /// The quoted span has closed; only whitespace may follow
    AfterQuoted,
}

/// Split one line into cells.
///
/// Commas inside a double-quoted span do not separate cells. A span opens
/// only when `"` is the first non-space character of a cell; elsewhere a
/// quote is literal text. Inside a span `""` is a literal quote. Whitespace
/// outside the span is trimmed, whitespace inside it is kept. An
/// unterminated span runs to the end of the line.
pub fn split_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut state = State::Start;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match (state, c) {
            (State::Quoted, '"') => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    cell.push('"');
                } else {
                    state = State::AfterQuoted;
                }
            }
            (State::Quoted, c) => cell.push(c),
            (_, ',') => {
                cells.push(finish_cell(&mut cell, state));
                state = State::Start;
            }
            (State::Start, '"') => state = State::Quoted,
            (State::Start | State::AfterQuoted, c) if c.is_whitespace() => {}
            (State::Start | State::AfterQuoted | State::Unquoted, c) => {
                cell.push(c);
                state = State::Unquoted;
            }
        }
    }
    cells.push(finish_cell(&mut cell, state));

    cells
}

fn finish_cell(cell: &mut String, state: State) -> String {
    let value = std::mem::take(cell);
    match state {
        State::Unquoted => value.trim_end().to_string(),
        State::Start | State::Quoted | State::AfterQuoted => value,
    }
}

/// Quote a cell unconditionally, doubling embedded quotes.
pub fn quote_cell(value: &str) -> String {
    format!("\"{}\"", flatten(value).replace('"', "\"\""))
}

/// Quote a cell only when it would otherwise break the row.
pub fn escape_cell(value: &str) -> String {
    let value = flatten(value);
    if value.contains(',') || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value
    }
}

// Import is line based, so line breaks inside a value become spaces.
fn flatten(value: &str) -> String {
    value.replace("\r\n", " ").replace(['\r', '\n'], " ")
}
