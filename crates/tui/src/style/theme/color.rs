//! Colour and modifier notation used by theme documents.

use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail, ensure};
use ratatui::style::{Color, Modifier};

/// Parse a colour.
///
/// Accepts the names and `#rrggbb` forms ratatui understands, plus `#rgb`,
/// `rgb(r, g, b)`, `ansi(n)` and `none`/`default` for the terminal default.
pub fn parse_color(input: &str) -> Result<Color> {
	let value = input.trim();

	if let Some(args) = call_args(value, "rgb") {
		let channels = args
			.split(',')
			.map(|part| {
				part.trim()
					.parse::<u8>()
					.with_context(|| format!("`{}` is not a colour channel", part.trim()))
			})
			.collect::<Result<Vec<_>>>()?;
		let &[r, g, b] = channels.as_slice() else {
			bail!("rgb() takes three channels, got {}", channels.len());
		};
		return Ok(Color::Rgb(r, g, b));
	}
	if let Some(args) = call_args(value, "ansi") {
		let index = args
			.trim()
			.parse()
			.with_context(|| format!("`{args}` is not an ANSI colour index"))?;
		return Ok(Color::Indexed(index));
	}
	if let Some(short) = value.strip_prefix('#').filter(|hex| hex.len() == 3) {
		return short_hex(short);
	}
	if value.eq_ignore_ascii_case("none") || value.eq_ignore_ascii_case("default") {
		return Ok(Color::Reset);
	}

	Color::from_str(value).map_err(|_| anyhow!("unknown colour `{value}`"))
}

fn call_args<'a>(value: &'a str, name: &str) -> Option<&'a str> {
	value
		.strip_prefix(name)?
		.trim_start()
		.strip_prefix('(')?
		.strip_suffix(')')
}

fn short_hex(hex: &str) -> Result<Color> {
	let mut channels = [0u8; 3];
	for (channel, digit) in channels.iter_mut().zip(hex.chars()) {
		let nibble = digit
			.to_digit(16)
			.with_context(|| format!("`#{hex}` is not a hex colour"))?;
		*channel = u8::try_from(nibble * 17)?;
	}
	let [r, g, b] = channels;
	Ok(Color::Rgb(r, g, b))
}

/// Parse a text modifier such as `bold` or `crossed-out`.
pub fn parse_modifier(input: &str) -> Result<Modifier> {
	let key: String = input
		.trim()
		.chars()
		.filter(|ch| !matches!(ch, '-' | '_' | ' '))
		.map(|ch| ch.to_ascii_lowercase())
		.collect();
	ensure!(!key.is_empty(), "empty modifier");

	let modifier = match key.as_str() {
		"bold" => Modifier::BOLD,
		"dim" => Modifier::DIM,
		"italic" => Modifier::ITALIC,
		"underline" | "underlined" => Modifier::UNDERLINED,
		"reverse" | "reversed" | "invert" | "inverted" => Modifier::REVERSED,
		"hidden" => Modifier::HIDDEN,
		"crossedout" | "strikethrough" => Modifier::CROSSED_OUT,
		"slowblink" | "blink" => Modifier::SLOW_BLINK,
		_ => bail!("unknown modifier `{}`", input.trim()),
	};
	Ok(modifier)
}
