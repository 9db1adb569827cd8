use std::fmt::Write as FmtWrite;
use std::io;

use indoc::writedoc;

use crate::apperr;
use crate::bitmap::{WORDS, WidthBitmap};

/// The symbol consumers link against. They may also read it as `uint32_t[2048]`.
pub const C_TABLE_NAME: &str = "__g_WCWidthTableIsFullSize";
pub const RUST_TABLE_NAME: &str = "WCWIDTH_TABLE_IS_FULL_SIZE";

const WORDS_PER_LINE: usize = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    C,
    Rust,
}

pub fn generate(bitmap: &WidthBitmap, lang: Language) -> String {
    match lang {
        Language::C => generate_c(bitmap),
        Language::Rust => generate_rust(bitmap),
    }
}

/// Writes the generated table to `out` and flushes it.
pub fn write<W: io::Write>(
    bitmap: &WidthBitmap,
    lang: Language,
    out: &mut W,
) -> apperr::Result<()> {
    let buf = generate(bitmap, lang);
    out.write_all(buf.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn generate_c(bitmap: &WidthBitmap) -> String {
    let mut buf = String::new();

    _ = writeln!(buf, "uint64_t {C_TABLE_NAME}[{WORDS}] = {{");
    for row in bitmap.words().chunks(WORDS_PER_LINE) {
        for (i, word) in row.iter().enumerate() {
            if i != 0 {
                buf.push(' ');
            }
            _ = write!(buf, "0x{word:016x}UL,");
        }
        buf.push('\n');
    }
    buf.push_str("};\n");

    buf
}

fn generate_rust(bitmap: &WidthBitmap) -> String {
    let mut buf = String::new();

    _ = writeln!(buf, "#[rustfmt::skip]\npub static {RUST_TABLE_NAME}: [u64; {WORDS}] = [");
    for row in bitmap.words().chunks(WORDS_PER_LINE) {
        buf.push_str("   ");
        for word in row {
            _ = write!(buf, " 0x{word:016x},");
        }
        buf.push('\n');
    }
    buf.push_str("];\n");

    _ = writedoc!(
        buf,
        "
        #[inline]
        pub fn is_full_size(cp: u32) -> bool {{
            let cp = cp as usize;
            cp < {0} * 64 && ({1}[cp / 64] >> (cp % 64)) & 1 != 0
        }}
        ",
        WORDS,
        RUST_TABLE_NAME,
    );

    buf
}
