//! Declarative attribute tables
//!
//! A `Schema` lists the comparable attributes of a game variant, how each is
//! compared, which roster column it is read from, and the order in which its
//! values are revealed as hints. Evaluation, hints, share text and roster
//! loading are all driven from this table.

use super::record::NAME_KEY;

/// How an attribute is compared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    /// Ordered integer with a `partial` tolerance band
    Numeric { tolerance: u32 },
    /// Case-sensitive text equality
    Categorical,
    /// Boolean equality
    Boolean,
    /// Tag set: overlap is `partial`, never `correct`
    Set,
}

/// One row of the attribute table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSpec {
    /// Key into [`PersonRecord`](super::PersonRecord) attributes
    pub key: &'static str,
    /// Column header label for on-screen grids
    pub label: &'static str,
    /// Header of the roster file column this attribute is read from
    pub column: &'static str,
    pub kind: AttributeKind,
}

impl AttributeSpec {
    const fn new(
        key: &'static str,
        label: &'static str,
        column: &'static str,
        kind: AttributeKind,
    ) -> Self {
        Self {
            key,
            label,
            column,
            kind,
        }
    }

    const fn numeric(
        key: &'static str,
        label: &'static str,
        column: &'static str,
        tolerance: u32,
    ) -> Self {
        Self::new(key, label, column, AttributeKind::Numeric { tolerance })
    }
}

/// A hint template; `{}` is replaced by the target's value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintSpec {
    pub key: &'static str,
    pub template: &'static str,
    /// Lower-case the value before interpolation
    pub lowercase: bool,
}

impl HintSpec {
    const fn new(key: &'static str, template: &'static str) -> Self {
        Self {
            key,
            template,
            lowercase: false,
        }
    }

    const fn lowercased(key: &'static str, template: &'static str) -> Self {
        Self {
            key,
            template,
            lowercase: true,
        }
    }
}

/// Named game variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Classic,
    Directory,
    Regional,
}

impl Variant {
    /// Create a variant from its name; `None` if unrecognised
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "classic" => Some(Self::Classic),
            "directory" => Some(Self::Directory),
            "regional" => Some(Self::Regional),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Directory => "directory",
            Self::Regional => "regional",
        }
    }
}

/// The attribute table of one game variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    variant: Variant,
    attributes: Vec<AttributeSpec>,
    hints: Vec<HintSpec>,
}

impl Schema {
    /// Header of the display-name column
    pub const NAME_COLUMN: &'static str = "Name";
    /// Header of the secondary-key column
    pub const EMAIL_COLUMN: &'static str = "Email";

    /// Build the schema for a variant
    #[must_use]
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Classic => Self::classic(),
            Variant::Directory => Self::directory(),
            Variant::Regional => Self::regional(),
        }
    }

    /// Canonical schema: title, gender, birth year, education and experience
    #[must_use]
    pub fn classic() -> Self {
        Self {
            variant: Variant::Classic,
            attributes: vec![
                name_spec(),
                title_spec(),
                gender_spec(),
                AttributeSpec::numeric("birth_year", "Born", "Birth Year", 5),
                AttributeSpec::numeric("years_of_education", "Edu", "Years of education", 2),
                AttributeSpec::numeric("experience", "Exp", "Experience", 3),
            ],
            hints: classic_hints(),
        }
    }

    /// Staff-directory schema with department, access roles and profile flags
    #[must_use]
    pub fn directory() -> Self {
        Self {
            variant: Variant::Directory,
            attributes: vec![
                name_spec(),
                title_spec(),
                AttributeSpec::new("department", "Dept", "Department", AttributeKind::Categorical),
                AttributeSpec::numeric("birth_year", "Born", "Birth Year", 5),
                AttributeSpec::numeric("years_of_education", "Edu", "Years of education", 2),
                AttributeSpec::numeric(
                    "years_since_first_work_experience",
                    "Exp",
                    "Years since first work experience",
                    3,
                ),
                AttributeSpec::new("access_roles", "Roles", "Access roles", AttributeKind::Set),
                AttributeSpec::new(
                    "has_profile_image",
                    "Photo",
                    "Has profile image",
                    AttributeKind::Boolean,
                ),
                AttributeSpec::new(
                    "owns_reference_project",
                    "Ref",
                    "Owns a reference project",
                    AttributeKind::Boolean,
                ),
            ],
            hints: vec![
                HintSpec::new("title", "This person's title is: {}"),
                HintSpec::new("department", "This person works in {}"),
                HintSpec::new("birth_year", "This person was born in {}"),
                HintSpec::new("years_of_education", "This person has {} years of education"),
                HintSpec::new(
                    "years_since_first_work_experience",
                    "This person has {} years of work experience",
                ),
                HintSpec::new("access_roles", "This person has the access roles: {}"),
            ],
        }
    }

    /// Classic schema extended with country of residence
    #[must_use]
    pub fn regional() -> Self {
        let mut schema = Self::classic();
        schema.variant = Variant::Regional;
        schema.attributes.insert(
            3,
            AttributeSpec::new("country", "Country", "Country", AttributeKind::Categorical),
        );
        schema
            .hints
            .insert(2, HintSpec::new("country", "This person lives in {}"));
        schema
    }

    /// Build an ad-hoc schema from explicit tables
    #[must_use]
    pub const fn custom(
        variant: Variant,
        attributes: Vec<AttributeSpec>,
        hints: Vec<HintSpec>,
    ) -> Self {
        Self {
            variant,
            attributes,
            hints,
        }
    }

    #[inline]
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Attributes in declared order
    #[inline]
    #[must_use]
    pub fn attributes(&self) -> &[AttributeSpec] {
        &self.attributes
    }

    /// Hint templates from least to most identifying
    #[inline]
    #[must_use]
    pub fn hints(&self) -> &[HintSpec] {
        &self.hints
    }

    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&AttributeSpec> {
        self.attributes.iter().find(|spec| spec.key == key)
    }

    /// Replace the tolerance of a numeric attribute
    ///
    /// Returns `false` if the key is unknown or not numeric.
    pub fn set_tolerance(&mut self, key: &str, tolerance: u32) -> bool {
        match self.attributes.iter_mut().find(|spec| spec.key == key) {
            Some(spec) if matches!(spec.kind, AttributeKind::Numeric { .. }) => {
                spec.kind = AttributeKind::Numeric { tolerance };
                true
            }
            _ => false,
        }
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::classic()
    }
}

const fn name_spec() -> AttributeSpec {
    AttributeSpec::new(NAME_KEY, "Name", Schema::NAME_COLUMN, AttributeKind::Categorical)
}

const fn title_spec() -> AttributeSpec {
    AttributeSpec::new("title", "Title", "Title (no)", AttributeKind::Categorical)
}

const fn gender_spec() -> AttributeSpec {
    AttributeSpec::new("gender", "Gender", "Gender", AttributeKind::Categorical)
}

fn classic_hints() -> Vec<HintSpec> {
    vec![
        HintSpec::new("title", "This person's title is: {}"),
        HintSpec::lowercased("gender", "This person is {}"),
        HintSpec::new("birth_year", "This person was born in {}"),
        HintSpec::new("years_of_education", "This person has {} years of education"),
        HintSpec::new("experience", "This person has {} years of work experience"),
    ]
}
