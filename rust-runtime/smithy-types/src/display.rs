/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Compact `{Name: value,Other: value}` rendering for model shapes.
//!
//! Only populated members are written. Lists render as `[a, b]` and nested shapes use their own
//! `Display` implementation, so a whole tree of shapes renders on one line.

use std::fmt::{self, Display, Formatter, Write};

/// Writes the members of a shape. Created with [`field_list`].
#[must_use = "must eventually call `finish()` on field lists"]
pub struct FieldList<'a, 'b> {
    fmt: &'a mut Formatter<'b>,
    result: fmt::Result,
    has_fields: bool,
}

/// Starts rendering a shape into `f`.
pub fn field_list<'a, 'b>(f: &'a mut Formatter<'b>) -> FieldList<'a, 'b> {
    let result = f.write_char('{');
    FieldList {
        fmt: f,
        result,
        has_fields: false,
    }
}

impl<'a, 'b> FieldList<'a, 'b> {
    /// Writes a member that is always present.
    pub fn field(&mut self, name: &str, value: &dyn Display) -> &mut Self {
        if self.result.is_ok() {
            self.result = self.write_field(name, value);
        }
        self
    }

    /// Writes a member only when it is set.
    pub fn optional<T: Display + ?Sized>(&mut self, name: &str, value: Option<&T>) -> &mut Self {
        if let Some(value) = value {
            self.field(name, &value);
        }
        self
    }

    /// Writes a list member. Lists are never absent, so an empty list renders as `[]`.
    pub fn list<T: Display>(&mut self, name: &str, values: &[T]) -> &mut Self {
        self.field(name, &DisplayList(values))
    }

    /// Closes the shape and returns any error raised while writing.
    pub fn finish(&mut self) -> fmt::Result {
        self.result?;
        self.fmt.write_char('}')
    }

    fn write_field(&mut self, name: &str, value: &dyn Display) -> fmt::Result {
        if self.has_fields {
            self.fmt.write_char(',')?;
        }
        self.has_fields = true;
        write!(self.fmt, "{}: {}", name, value)
    }
}

/// Renders a slice as `[a, b, c]` using each element's `Display` implementation.
pub struct DisplayList<'a, T>(pub &'a [T]);

impl<T: Display> Display for DisplayList<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for (idx, item) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        f.write_char(']')
    }
}

#[cfg(test)]
mod test {
    use super::field_list;
    use std::fmt;

    struct Shape {
        name: Option<String>,
        count: Option<i32>,
        tags: Vec<String>,
    }

    impl fmt::Display for Shape {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            field_list(f)
                .optional("Name", self.name.as_deref())
                .optional("Count", self.count.as_ref())
                .list("Tags", &self.tags)
                .finish()
        }
    }

    #[test]
    fn unset_members_are_omitted() {
        let shape = Shape {
            name: None,
            count: None,
            tags: vec![],
        };
        assert_eq!(shape.to_string(), "{Tags: []}");
    }

    #[test]
    fn members_are_comma_separated_without_trailing_comma() {
        let shape = Shape {
            name: Some("web".to_string()),
            count: Some(3),
            tags: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(shape.to_string(), "{Name: web,Count: 3,Tags: [a, b]}");
    }

    #[test]
    fn empty_shape() {
        struct Empty;
        impl fmt::Display for Empty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                field_list(f).finish()
            }
        }
        assert_eq!(Empty.to_string(), "{}");
    }
}
