//! Terminal output for `versefind search`

use crate::query::{SearchPage, SnippetBuilder, SnippetSpans};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print a page of matches with the match highlighted
///
/// Works from raw spans rather than escaped snippets, so the terminal shows
/// the corpus text as written.
pub fn print_matches(
    text: &[u8],
    offsets: &[usize],
    match_len: usize,
    color: bool,
) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    let builder = SnippetBuilder::new(text);

    for (i, &offset) in offsets.iter().enumerate() {
        if i > 0 {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
            writeln!(stdout, "--")?;
            stdout.reset()?;
        }

        let spans = builder.expand(offset, match_len);
        print_snippet(&mut stdout, text, &spans)?;
    }

    Ok(())
}

/// Print one snippet: offset header, then start / highlighted middle / end
fn print_snippet(
    stdout: &mut StandardStream,
    text: &[u8],
    spans: &SnippetSpans,
) -> io::Result<()> {
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(stdout, "{}", spans.middle.start)?;
    stdout.reset()?;
    writeln!(stdout, ":")?;

    // Text before match
    stdout.write_all(&text[spans.start.clone()])?;

    // The match itself (highlighted)
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    stdout.write_all(&text[spans.middle.clone()])?;
    stdout.reset()?;

    // Text after match
    stdout.write_all(&text[spans.end.clone()])?;
    writeln!(stdout)?;

    Ok(())
}

/// Print a footer telling the user how to get the next page
pub fn print_page_footer(page: &SearchPage, total: u64) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);

    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
    write!(
        stdout,
        "page {} | {} shown | {} total",
        page.page,
        page.snippets.len(),
        total
    )?;
    stdout.reset()?;

    if let Some(next) = page.next_page() {
        write!(stdout, " | next: --page {}", next)?;
    }
    writeln!(stdout)?;

    Ok(())
}
