/// Renders one boarding card as a framed text block. The border width
/// follows the content line, so the frame fits any name length.
pub fn render_card(passenger: &str, seat: &str, flight_number: &str, aircraft_model: &str) -> String {
    let content =
        format!("|Name: {passenger} Flight: {flight_number} Seat: {seat} Aircraft: {aircraft_model} |");
    let width = content.chars().count() - 2;
    let banner = format!("+{}+", "-".repeat(width));
    let border = format!("|{}|", " ".repeat(width));
    [
        banner.as_str(),
        border.as_str(),
        content.as_str(),
        border.as_str(),
        banner.as_str(),
    ]
    .join("\n")
}

/// Default printer injected by the REPL: card to stdout, blank line after.
pub fn console_card_printer(passenger: &str, seat: &str, flight_number: &str, aircraft_model: &str) {
    println!("{}\n", render_card(passenger, seat, flight_number, aircraft_model));
}
