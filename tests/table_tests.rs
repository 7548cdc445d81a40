use ansi_term::Colour;
use parkwatch::core::validate;
use parkwatch::utils::colors::colorize_available;
use parkwatch::utils::table::{Column, Table, strip_ansi, visible_width};

#[test]
fn strip_ansi_removes_colour_sequences() {
    assert_eq!(strip_ansi("\x1b[32mfree\x1b[0m"), "free");
    assert_eq!(strip_ansi("\x1b[1;31mfull\x1b[0m spots"), "full spots");
    assert_eq!(strip_ansi("plain"), "plain");

    let painted = Colour::RGB(255, 153, 51).paint("create_admin").to_string();
    assert_eq!(strip_ansi(&painted), "create_admin");
}

#[test]
fn visible_width_ignores_colours_and_counts_display_columns() {
    assert_eq!(visible_width(&colorize_available("12", 12, 20)), 2);
    assert_eq!(visible_width("Café"), 4);
    assert_eq!(visible_width("駐車場"), 6);
}

#[test]
fn coloured_cells_keep_columns_aligned() {
    let mut table = Table::new(vec![Column::new("Name", 6), Column::new("Free", 4)]);
    table.add_row(vec!["Lot A".into(), colorize_available("0", 0, 10)]);
    table.add_row(vec!["Lot B".into(), "7".into()]);

    let rendered = table.render();
    let widths: Vec<usize> = rendered.lines().map(visible_width).collect();
    assert_eq!(widths, vec![12, 12, 12, 12]);
}

#[test]
fn email_pattern_accepts_ordinary_addresses() {
    for ok in ["a@b.co", "first.last+tag@sub.example.org", " MIXED@Case.Com "] {
        assert!(validate::email(ok).is_ok(), "{ok}");
    }
    for bad in ["", "plain", "a@b", "a b@c.d", "@example.org"] {
        assert!(validate::email(bad).is_err(), "{bad:?}");
    }
}
