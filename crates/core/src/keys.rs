//! Decoding of raw keyboard bytes into symbolic keys.
//!
//! While the terminal is raw every keystroke arrives as bytes on stdin. Arrow
//! keys arrive as three byte escape sequences (`ESC [ A` and friends), or
//! longer ones when a modifier is held. Every other key the selector
//! understands is a single byte.

use std::io::Read;

use crate::error::Result;

const ESCAPE: u8 = 0x1b;
const CTRL_C: u8 = 0x03;
const CSI: u8 = b'[';

// Longest parameter run consumed before a CSI sequence is given up as unknown
const MAX_CSI_PARAMETER_BYTES: usize = 16;

/// A symbolic key as understood by the selection engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    CtrlC,
    Unknown,
}

/// Reads one logical keypress at a time from a byte source.
pub struct KeyDecoder<R> {
    reader: R,
}

impl<R: Read> KeyDecoder<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Blocks until a full key has been read.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::IoFailure`] when the stream ends or the
    /// read fails, including part way through an escape sequence.
    pub fn read_key(&mut self) -> Result<Key> {
        let mut byte = [0u8; 1];
        self.reader.read_exact(&mut byte)?;

        if byte[0] != ESCAPE {
            return Ok(classify_byte(byte[0]));
        }

        let mut sequence = [0u8; 2];
        self.reader.read_exact(&mut sequence)?;

        if sequence[0] == CSI && is_csi_parameter(sequence[1]) {
            // Modified keys such as Shift+Left (`ESC [ 1 ; 2 D`) carry
            // parameters before the final byte.
            return Ok(match self.read_csi_final()? {
                Some(final_byte) => classify_escape([CSI, final_byte]),
                None => Key::Unknown,
            });
        }

        Ok(classify_escape(sequence))
    }

    fn read_csi_final(&mut self) -> Result<Option<u8>> {
        let mut byte = [0u8; 1];
        for _ in 0..MAX_CSI_PARAMETER_BYTES {
            self.reader.read_exact(&mut byte)?;
            if !is_csi_parameter(byte[0]) {
                return Ok(Some(byte[0]));
            }
        }
        Ok(None)
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }
}

/// Maps a single non-escape byte to a key, including the letter aliases
/// (`wasd` and vim-style `hjkl`) for terminals without usable arrow keys.
#[must_use]
pub fn classify_byte(byte: u8) -> Key {
    match byte {
        b'\r' | b'\n' => Key::Enter,
        CTRL_C => Key::CtrlC,
        b'w' | b'W' | b'k' | b'K' => Key::Up,
        b's' | b'S' | b'j' | b'J' => Key::Down,
        b'a' | b'A' | b'h' | b'H' => Key::Left,
        b'd' | b'D' | b'l' | b'L' => Key::Right,
        _ => Key::Unknown,
    }
}

fn is_csi_parameter(byte: u8) -> bool {
    // Parameter (0x30-0x3F) and intermediate (0x20-0x2F) bytes
    (0x20..=0x3f).contains(&byte)
}

/// Maps the two bytes following `ESC` to an arrow key.
///
/// Both the CSI (`ESC [`) and the application cursor mode SS3 (`ESC O`)
/// introducers are accepted.
#[must_use]
pub fn classify_escape(sequence: [u8; 2]) -> Key {
    match sequence {
        [b'[' | b'O', b'A'] => Key::Up,
        [b'[' | b'O', b'B'] => Key::Down,
        [b'[' | b'O', b'C'] => Key::Right,
        [b'[' | b'O', b'D'] => Key::Left,
        _ => Key::Unknown,
    }
}
