// MIT LICENSE
//
// Permission is hereby granted, free of charge, to any
// person obtaining a copy of this software and associated
// documentation files (the "Software"), to deal in the
// Software without restriction, including without
// limitation the rights to use, copy, modify, merge,
// publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software
// is furnished to do so, subject to the following
// conditions:
//
// The above copyright notice and this permission notice
// shall be included in all copies or substantial portions
// of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF
// ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED
// TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A
// PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT
// SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY
// CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR
// IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
// DEALINGS IN THE SOFTWARE.

//! Indented, human-friendly rendering of hash trees and the byte blocks
//! they hold.

use core::fmt;
use std::io::{Result, Write};

use itertools::Itertools;

/// Hex characters kept at each end of an abbreviated byte string.
pub const HEX_LEN: usize = 8;
/// Longest UTF-8 rendering shown before truncation.
pub const STR_LEN: usize = 32;
const INDENT_SPACES: usize = 4;

/// Pretty rendering of a tree component into a [`Drawer`].
pub trait Visualize {
    /// Write `self` into `drawer` and hand the drawer back.
    fn visualize<W: Write>(&self, drawer: Drawer<W>) -> Result<Drawer<W>>;
}

/// Wrapper with a `Debug` implementation showing a byte block as abbreviated
/// hex plus its text, when it is valid UTF-8.
#[derive(Clone, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub struct DebugBytes(pub Vec<u8>);

impl fmt::Debug for DebugBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut v = Vec::new();
        visualize_to_vec(&mut v, self.0.as_slice()).map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&v))
    }
}

/// An `io::Write` proxy that indents every new line by the current nesting
/// level.
pub struct Drawer<W: Write> {
    level: usize,
    write: W,
}

impl<W: Write> Drawer<W> {
    /// Start drawing at nesting level zero.
    pub fn new(write: W) -> Self {
        Drawer { level: 0, write }
    }

    /// Current nesting level.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Nest one level deeper.
    pub fn down(&mut self) {
        self.level += 1;
    }

    /// Return one level up. Stays at zero when already there.
    pub fn up(&mut self) {
        self.level = self.level.saturating_sub(1);
    }

    /// Write `buf`, indenting each line break to the current level.
    pub fn write(&mut self, buf: &[u8]) -> Result<()> {
        let sep = if self.level > 0 {
            format!("\n{}", " ".repeat(INDENT_SPACES * self.level - 1))
        } else {
            "\n".to_string()
        };
        let lines = buf.split(|c| *c == b'\n');
        for chunk in Itertools::intersperse(lines, sep.as_bytes()) {
            self.write.write_all(chunk)?;
        }
        Ok(())
    }

    /// Start a new line at the current level.
    pub fn newline(&mut self) -> Result<()> {
        self.write(b"\n")
    }

    /// Terminate the drawing with a newline and flush the writer.
    pub fn flush(&mut self) -> Result<()> {
        self.write.write_all(b"\n")?;
        self.write.flush()
    }

}

/// Hex encode `bytes`, keeping only both ends of long inputs.
pub fn to_hex(bytes: &[u8]) -> String {
    let encoded = hex::encode(bytes);
    let remaining = encoded.len().saturating_sub(HEX_LEN);
    if remaining >= 2 * HEX_LEN {
        format!("{}..{}", &encoded[..HEX_LEN], &encoded[remaining..])
    } else {
        encoded
    }
}

impl Visualize for [u8] {
    fn visualize<W: Write>(&self, mut drawer: Drawer<W>) -> Result<Drawer<W>> {
        drawer.write(format!("[hex: {}", to_hex(self)).as_bytes())?;
        if let Ok(text) = std::str::from_utf8(self) {
            let shown: String = text.chars().take(STR_LEN).collect();
            let ellipsis = if shown.len() < text.len() { "..." } else { "" };
            drawer.write(format!(", str: {shown}{ellipsis}").as_bytes())?;
        }
        drawer.write(b"]")?;
        Ok(drawer)
    }
}

impl Visualize for Vec<u8> {
    fn visualize<W: Write>(&self, drawer: Drawer<W>) -> Result<Drawer<W>> {
        self.as_slice().visualize(drawer)
    }
}

/// Render `value` into a growable buffer.
pub fn visualize_to_vec<T: Visualize + ?Sized>(v: &mut Vec<u8>, value: &T) -> Result<()> {
    value.visualize(Drawer::new(v))?;
    Ok(())
}

/// Render `value` into a `String`, replacing invalid UTF-8.
pub fn visualize_to_string<T: Visualize + ?Sized>(value: &T) -> Result<String> {
    let mut v = Vec::new();
    visualize_to_vec(&mut v, value)?;
    Ok(String::from_utf8_lossy(&v).into_owned())
}
