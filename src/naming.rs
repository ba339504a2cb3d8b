//! name conversions for generated identifiers

/// pascal case that keeps underscores, matching graphql codegen type names
///
/// `getUser` becomes `GetUser`, `get_user` becomes `Get_User`.
pub fn pascal_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = true;
    for ch in name.chars() {
        if ch == '_' {
            out.push(ch);
            upper = true;
            continue;
        }
        if ch == '-' || ch.is_whitespace() {
            upper = true;
            continue;
        }
        if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("getUser"), "GetUser");
        assert_eq!(pascal_case("GetUser"), "GetUser");
        assert_eq!(pascal_case("get_user"), "Get_User");
        assert_eq!(pascal_case("get-user"), "GetUser");
    }
}
