//! Plain data carried between extraction, the entry model and rendering.

/// A `/** ... */` block plus its first non-blank trailing code line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawComment<'a> {
    /// The matched text, from `/**` through the end of the code line.
    pub text: &'a str,
    /// Byte offset of `/**` within the source.
    pub offset: usize,
}

/// Parsed `@param` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// e.g. "Array", "string|number"
    pub ty: String,
    /// Display name: `name`, `[name]`, or `[name=default]`
    pub name: String,
    pub desc: String,
}

impl Param {
    /// The bare identifier, without brackets or default value.
    pub fn bare_name(&self) -> &str {
        let name = self.name.trim_start_matches('[').trim_end_matches(']');
        name.split('=').next().unwrap_or(name).trim()
    }
}

/// Parsed `@returns` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Returns {
    pub ty: String,
    pub desc: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(name: &str) -> Param {
        Param {
            ty: "Object".to_string(),
            name: name.to_string(),
            desc: String::new(),
        }
    }

    #[test]
    fn bare_name_strips_brackets_and_default() {
        assert_eq!(param("options").bare_name(), "options");
        assert_eq!(param("[options]").bare_name(), "options");
        assert_eq!(param("[options={}]").bare_name(), "options");
        assert_eq!(param("[options.leading=false]").bare_name(), "options.leading");
    }
}
