use unicode_xid::UnicodeXID;

pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || (!c.is_ascii() && UnicodeXID::is_xid_start(c))
}

pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || (!c.is_ascii() && UnicodeXID::is_xid_continue(c))
}

pub fn is_dec_digit(c: char) -> bool {
    c.is_ascii_digit()
}
