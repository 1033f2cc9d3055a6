use nom::branch::alt;
use nom::bytes::complete::{tag, tag_no_case};
use nom::character::complete::{alpha1, char, hex_digit1, space0, space1};
use nom::combinator::{all_consuming, cond, opt, verify};
use nom::error::ErrorKind;
use nom::number::complete::double;
use nom::sequence::{preceded, tuple};
use nom::Err;
use nom::IResult;

use crate::named::find_named_color;
use crate::types::Scalar;
use crate::Color;

type Separator<'a> = fn(&'a str) -> IResult<&'a str, &'a str>;
type Component<'a> = fn(&'a str) -> IResult<&'a str, Scalar>;

fn comma_separated(input: &str) -> IResult<&str, &str> {
    let (input, _) = space0(input)?;
    let (input, _) = char(',')(input)?;
    space0(input)
}

/// Legacy (CSS Color 3) functions separate their arguments by commas, but space separated input
/// is also accepted with plain white space.
fn legacy_separator(input: &str) -> IResult<&str, &str> {
    alt((comma_separated, space1))(input)
}

/// A finite floating point number. `double` also accepts `nan` and `inf`, which are not valid
/// color components.
fn number(input: &str) -> IResult<&str, Scalar> {
    verify(double, |value: &Scalar| value.is_finite())(input)
}

fn percentage(input: &str) -> IResult<&str, Scalar> {
    let (input, percent) = number(input)?;
    let (input, _) = char('%')(input)?;
    Ok((input, percent / 100.))
}

fn alpha_value(input: &str) -> IResult<&str, Scalar> {
    alt((percentage, number))(input)
}

fn legacy_alpha(input: &str) -> IResult<&str, Scalar> {
    let (input, alpha) = opt(preceded(legacy_separator, alpha_value))(input)?;
    Ok((input, alpha.unwrap_or(1.0)))
}

fn modern_alpha(input: &str) -> IResult<&str, Scalar> {
    let (input, alpha) = opt(preceded(tuple((space0, char('/'), space0)), alpha_value))(input)?;
    Ok((input, alpha.unwrap_or(1.0)))
}

fn degrees(input: &str) -> IResult<&str, Scalar> {
    let (input, d) = number(input)?;
    let (input, _) = alt((tag("°"), tag("deg"), tag("")))(input)?;
    Ok((input, d))
}

fn radians(input: &str) -> IResult<&str, Scalar> {
    let (input, rads) = number(input)?;
    let (input, _) = tag("rad")(input)?;
    Ok((input, rads.to_degrees()))
}

fn gradians(input: &str) -> IResult<&str, Scalar> {
    let (input, grads) = number(input)?;
    let (input, _) = tag("grad")(input)?;
    Ok((input, grads * 360. / 400.))
}

fn turns(input: &str) -> IResult<&str, Scalar> {
    let (input, turns) = number(input)?;
    let (input, _) = tag("turn")(input)?;
    Ok((input, turns * 360.))
}

fn angle(input: &str) -> IResult<&str, Scalar> {
    alt((turns, gradians, radians, degrees))(input)
}

fn rgb_number(input: &str) -> IResult<&str, Scalar> {
    let (input, value) = number(input)?;
    Ok((input, value / 255.))
}

fn three<'a>(
    input: &'a str,
    separator: Separator<'a>,
    component: Component<'a>,
) -> IResult<&'a str, [Scalar; 3]> {
    let (input, x) = component(input)?;
    let (input, _) = separator(input)?;
    let (input, y) = component(input)?;
    let (input, _) = separator(input)?;
    let (input, z) = component(input)?;
    Ok((input, [x, y, z]))
}

/// Three RGB channels, either all numbers (0 to 255) or all percentages, scaled to [0, 1].
fn rgb_channels<'a>(input: &'a str, separator: Separator<'a>) -> IResult<&'a str, [Scalar; 3]> {
    alt((
        |i| three(i, separator, rgb_number),
        |i| three(i, separator, percentage),
    ))(input)
}

fn hex(input: &str) -> IResult<&str, Color> {
    let (input, _) = opt(char('#'))(input)?;
    let (input, digits) = verify(hex_digit1, |d: &str| matches!(d.len(), 3 | 4 | 6 | 8))(input)?;
    let value = u32::from_str_radix(digits, 16)
        .map_err(|_| Err::Error(nom::error::Error::new(input, ErrorKind::HexDigit)))?;

    let nibble = |shift: u32| ((value >> shift) & 0xf) as u8 * 17;
    let byte = |shift: u32| ((value >> shift) & 0xff) as u8;

    let color = match digits.len() {
        // RGB
        3 => Color::from_rgb(nibble(8), nibble(4), nibble(0)),
        // RGBA
        4 => Color::from_rgba(
            nibble(12),
            nibble(8),
            nibble(4),
            Scalar::from(nibble(0)) / 255.,
        ),
        // RRGGBB
        6 => Color::from_rgb(byte(16), byte(8), byte(0)),
        // RRGGBBAA
        _ => Color::from_rgba(byte(24), byte(16), byte(8), Scalar::from(byte(0)) / 255.),
    };

    Ok((input, color))
}

fn legacy_rgb(input: &str) -> IResult<&str, Color> {
    let (input, prefix) = opt(alt((tag_no_case("rgb("), tag_no_case("rgba("))))(input)?;
    let (input, _) = space0(input)?;
    let (input, [r, g, b]) = rgb_channels(input, legacy_separator)?;
    let (input, alpha) = legacy_alpha(input)?;
    let (input, _) = space0(input)?;
    let (input, _) = cond(prefix.is_some(), char(')'))(input)?;

    Ok((input, Color::from_rgba_float(r, g, b, alpha)))
}

fn css_rgb(input: &str) -> IResult<&str, Color> {
    let (input, _) = alt((tag_no_case("rgb("), tag_no_case("rgba(")))(input)?;
    let (input, _) = space0(input)?;
    let (input, [r, g, b]) = rgb_channels(input, space1)?;
    let (input, alpha) = modern_alpha(input)?;
    let (input, _) = space0(input)?;
    let (input, _) = char(')')(input)?;

    Ok((input, Color::from_rgba_float(r, g, b, alpha)))
}

fn legacy_hsl(input: &str) -> IResult<&str, Color> {
    let (input, _) = alt((tag_no_case("hsl("), tag_no_case("hsla(")))(input)?;
    let (input, _) = space0(input)?;
    let (input, h) = angle(input)?;
    let (input, _) = legacy_separator(input)?;
    let (input, s) = percentage(input)?;
    let (input, _) = legacy_separator(input)?;
    let (input, l) = percentage(input)?;
    let (input, alpha) = legacy_alpha(input)?;
    let (input, _) = space0(input)?;
    let (input, _) = char(')')(input)?;

    Ok((input, Color::from_hsla(h, s, l, alpha)))
}

fn css_hsl(input: &str) -> IResult<&str, Color> {
    let (input, _) = alt((tag_no_case("hsl("), tag_no_case("hsla(")))(input)?;
    let (input, _) = space0(input)?;
    let (input, h) = angle(input)?;
    let (input, _) = space1(input)?;
    let (input, s) = percentage(input)?;
    let (input, _) = space1(input)?;
    let (input, l) = percentage(input)?;
    let (input, alpha) = modern_alpha(input)?;
    let (input, _) = space0(input)?;
    let (input, _) = char(')')(input)?;

    Ok((input, Color::from_hsla(h, s, l, alpha)))
}

fn named(input: &str) -> IResult<&str, Color> {
    let (rest, name) = all_consuming(alpha1)(input)?;

    if name.eq_ignore_ascii_case("transparent") {
        return Ok((rest, Color::transparent()));
    }

    match find_named_color(name) {
        Some(nc) => Ok((rest, nc.color.clone())),
        None => Err(Err::Error(nom::error::Error::new(input, ErrorKind::Alpha))),
    }
}

/// Parse a color from one of its textual forms: hex notation, the legacy and modern forms of
/// the CSS `rgb()`/`rgba()` and `hsl()`/`hsla()` functions, bare RGB triples (`255, 0, 153`) and
/// CSS color keywords. Leading and trailing white space is ignored.
pub fn parse_color(input: &str) -> Option<Color> {
    alt((
        all_consuming(hex),
        all_consuming(css_rgb),
        all_consuming(legacy_rgb),
        all_consuming(css_hsl),
        all_consuming(legacy_hsl),
        all_consuming(named),
    ))(input.trim())
    .ok()
    .map(|(_, c)| c)
}
