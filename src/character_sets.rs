/// Check if a character is trimmed from both ends of a URL before scanning.
/// Space, tab, CR, LF, form-feed, no-break space and the BOM.
pub fn is_trim_whitespace(c: char) -> bool {
    matches!(
        c,
        ' ' | '\t' | '\r' | '\n' | '\u{0C}' | '\u{A0}' | '\u{FEFF}'
    )
}

/// Check if a character is whitespace for the relative-path fast path.
/// Follows the ECMAScript `\s` class, which differs from `char::is_whitespace`
/// on U+0085 and U+FEFF.
pub fn is_pattern_whitespace(c: char) -> bool {
    match c {
        '\u{85}' => false,
        '\u{FEFF}' => true,
        _ => c.is_whitespace(),
    }
}

/// Host scan classes for [`classify_host_byte`]
pub const HOST_PLAIN: u8 = 0;
/// Never part of a hostname, but does not end the authority
pub const HOST_INVALID: u8 = 1;
/// Ends the authority (`#`, `/`, `?`)
pub const HOST_END: u8 = 2;
/// Separates auth from host
pub const HOST_AT: u8 = 3;

const HOST_SCAN_TABLE: [u8; 128] = {
    let mut table = [HOST_PLAIN; 128];

    // Characters that are never allowed in a hostname (RFC 2396)
    table[b'\t' as usize] = HOST_INVALID;
    table[b'\n' as usize] = HOST_INVALID;
    table[b'\r' as usize] = HOST_INVALID;
    table[b' ' as usize] = HOST_INVALID;
    table[b'"' as usize] = HOST_INVALID;
    table[b'%' as usize] = HOST_INVALID;
    table[b'\'' as usize] = HOST_INVALID;
    table[b';' as usize] = HOST_INVALID;
    table[b'<' as usize] = HOST_INVALID;
    table[b'>' as usize] = HOST_INVALID;
    table[b'\\' as usize] = HOST_INVALID;
    table[b'^' as usize] = HOST_INVALID;
    table[b'`' as usize] = HOST_INVALID;
    table[b'{' as usize] = HOST_INVALID;
    table[b'|' as usize] = HOST_INVALID;
    table[b'}' as usize] = HOST_INVALID;

    table[b'#' as usize] = HOST_END;
    table[b'/' as usize] = HOST_END;
    table[b'?' as usize] = HOST_END;

    table[b'@' as usize] = HOST_AT;

    table
};

/// Classify a byte while scanning the authority section
pub fn classify_host_byte(b: u8) -> u8 {
    if b.is_ascii() {
        HOST_SCAN_TABLE[b as usize]
    } else {
        HOST_PLAIN
    }
}

const HOSTNAME_CHAR_TABLE: [bool; 128] = {
    let mut table = [false; 128];

    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] = true;
        i += 1;
    }
    let mut i = b'A';
    while i <= b'Z' {
        table[i as usize] = true;
        i += 1;
    }
    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = true;
        i += 1;
    }
    table[b'.' as usize] = true;
    table[b'-' as usize] = true;
    table[b'+' as usize] = true;
    table[b'_' as usize] = true;

    table
};

/// Check if a character may appear in a (non-IPv6) hostname.
/// Anything above U+007F is accepted and left to IDNA.
pub fn is_hostname_char(c: char) -> bool {
    match u8::try_from(c) {
        Ok(b) if b.is_ascii() => HOSTNAME_CHAR_TABLE[b as usize],
        _ => true,
    }
}

/// Escapes applied to everything after the host.
/// Delimiters and unwise characters from RFC 2396, plus `'`.
const AUTO_ESCAPE_TABLE: [Option<&str>; 128] = {
    let mut table: [Option<&str>; 128] = [None; 128];

    table[b'\t' as usize] = Some("%09");
    table[b'\n' as usize] = Some("%0A");
    table[b'\r' as usize] = Some("%0D");
    table[b' ' as usize] = Some("%20");
    table[b'"' as usize] = Some("%22");
    table[b'\'' as usize] = Some("%27");
    table[b'<' as usize] = Some("%3C");
    table[b'>' as usize] = Some("%3E");
    table[b'\\' as usize] = Some("%5C");
    table[b'^' as usize] = Some("%5E");
    table[b'`' as usize] = Some("%60");
    table[b'{' as usize] = Some("%7B");
    table[b'|' as usize] = Some("%7C");
    table[b'}' as usize] = Some("%7D");

    table
};

/// Look up the auto-escape substitute for a byte
pub fn auto_escape_byte(b: u8) -> Option<&'static str> {
    if b.is_ascii() {
        AUTO_ESCAPE_TABLE[b as usize]
    } else {
        None
    }
}
