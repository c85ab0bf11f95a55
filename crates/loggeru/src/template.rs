//! Renders message templates against runtime arguments.
//!
//! Templates use the brace syntax of `format!`:
//!
//! * `{}` takes the next argument in order
//! * `{N}` takes the argument at index `N`
//! * `{{` and `}}` are literal braces
//! * `{:spec}` / `{N:spec}` accept `[[fill]align][0][width][.precision]`, with
//!   `<`, `^` and `>` as alignments
//!
//! Width, precision and the `0` flag are applied by the argument's own `Display` impl,
//! exactly as `format!` would: numbers are right-aligned by default, strings
//! left-aligned, and `0` only pads numbers.
//!
//! Unlike `format!`, templates are only known at runtime, so every mismatch between a
//! template and its arguments is reported as a [`TemplateError`] instead of failing to
//! compile. Every argument must be referenced at least once.

use std::fmt::Display;
use std::iter;

/// An error that occurred while rendering a template
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("unclosed '{{' at byte {0}")]
    UnclosedBrace(usize),
    #[error("unmatched '}}' at byte {0}")]
    UnmatchedCloseBrace(usize),
    #[error("placeholder refers to argument {index}, but only {given} were given")]
    MissingArgument { index: usize, given: usize },
    #[error("invalid argument index {0:?}")]
    InvalidIndex(String),
    #[error("invalid format spec {0:?}")]
    InvalidSpec(String),
    #[error("{unused} of {given} arguments were never used")]
    UnusedArguments { unused: usize, given: usize },
}

/// Renders `template` against `args`.
///
/// Arguments are rendered once and inserted as-is; braces inside an argument are never
/// interpreted.
pub fn render(template: &str, args: &[&dyn Display]) -> Result<String, TemplateError> {
    let mut output = String::with_capacity(template.len());
    let mut used = vec![false; args.len()];
    let mut next_index = 0;

    let mut chars = template.char_indices().peekable();
    while let Some((position, c)) = chars.next() {
        match c {
            '{' => {
                if let Some((_, '{')) = chars.peek() {
                    chars.next();
                    output.push('{');
                    continue;
                }
                let end = loop {
                    match chars.next() {
                        Some((end, '}')) => break end,
                        Some((_, '{')) | None => return Err(TemplateError::UnclosedBrace(position)),
                        Some(_) => {}
                    }
                };

                let placeholder = &template[position + 1..end];
                let (index, spec) = match placeholder.split_once(':') {
                    Some((index, spec)) => (index, Spec::parse(spec)?),
                    None => (placeholder, Spec::default()),
                };
                let index = if index.is_empty() {
                    next_index += 1;
                    next_index - 1
                } else {
                    index
                        .parse::<usize>()
                        .map_err(|_| TemplateError::InvalidIndex(index.to_string()))?
                };

                let arg = args.get(index).ok_or(TemplateError::MissingArgument {
                    index,
                    given: args.len(),
                })?;
                used[index] = true;
                spec.write(&mut output, *arg);
            }
            '}' => match chars.peek() {
                Some((_, '}')) => {
                    chars.next();
                    output.push('}');
                }
                _ => return Err(TemplateError::UnmatchedCloseBrace(position)),
            },
            c => output.push(c),
        }
    }

    let unused = used.iter().filter(|&&used| !used).count();
    if unused > 0 {
        return Err(TemplateError::UnusedArguments {
            unused,
            given: args.len(),
        });
    }
    Ok(output)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(Align::Left),
            '^' => Some(Align::Center),
            '>' => Some(Align::Right),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Spec {
    fill: char,
    align: Option<Align>,
    zero: bool,
    width: usize,
    precision: Option<usize>,
}

impl Default for Spec {
    fn default() -> Self {
        Self {
            fill: ' ',
            align: None,
            zero: false,
            width: 0,
            precision: None,
        }
    }
}

impl Spec {
    fn parse(text: &str) -> Result<Self, TemplateError> {
        let invalid = || TemplateError::InvalidSpec(text.to_string());
        let mut spec = Spec::default();
        let mut rest = text;

        let mut chars = rest.chars();
        let first = chars.next();
        let second = chars.next();
        if let (Some(fill), Some(align)) = (first, second.and_then(Align::from_char)) {
            spec.fill = fill;
            spec.align = Some(align);
            rest = &rest[fill.len_utf8() + 1..];
        } else if let Some(align) = first.and_then(Align::from_char) {
            spec.align = Some(align);
            rest = &rest[1..];
        }

        if let Some(stripped) = rest.strip_prefix('0') {
            spec.zero = true;
            rest = stripped;
        }

        let (width, remaining) = split_digits(rest);
        if !width.is_empty() {
            spec.width = width.parse().map_err(|_| invalid())?;
        }
        rest = remaining;

        if let Some(precision) = rest.strip_prefix('.') {
            let (digits, remaining) = split_digits(precision);
            if digits.is_empty() {
                return Err(invalid());
            }
            spec.precision = Some(digits.parse().map_err(|_| invalid())?);
            rest = remaining;
        }

        if !rest.is_empty() {
            return Err(invalid());
        }
        Ok(spec)
    }

    fn write(&self, output: &mut String, arg: &dyn Display) {
        let precision = self.precision;
        // a `format!` call carrying the given flags, width and precision
        macro_rules! pad {
            ($flags:literal, $width:expr) => {
                match precision {
                    Some(p) => format!(concat!("{:", $flags, "w$.p$}"), arg, w = $width, p = p),
                    None => format!(concat!("{:", $flags, "w$}"), arg, w = $width),
                }
            };
        }

        if self.fill != ' ' {
            // a runtime fill can't be passed to the formatter, pad by hand
            let rendered = pad!("", 0);
            let padding = self.width.saturating_sub(rendered.chars().count());
            let (before, after) = match self.align.unwrap_or(Align::Left) {
                Align::Left => (0, padding),
                Align::Right => (padding, 0),
                Align::Center => (padding / 2, padding - padding / 2),
            };
            output.extend(iter::repeat(self.fill).take(before));
            output.push_str(&rendered);
            output.extend(iter::repeat(self.fill).take(after));
            return;
        }

        let width = self.width;
        let rendered = match (self.align, self.zero) {
            (None, false) => pad!("", width),
            (None, true) => pad!("0", width),
            (Some(Align::Left), false) => pad!("<", width),
            (Some(Align::Left), true) => pad!("<0", width),
            (Some(Align::Center), false) => pad!("^", width),
            (Some(Align::Center), true) => pad!("^0", width),
            (Some(Align::Right), false) => pad!(">", width),
            (Some(Align::Right), true) => pad!(">0", width),
        };
        output.push_str(&rendered);
    }
}

fn split_digits(text: &str) -> (&str, &str) {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    text.split_at(end)
}
