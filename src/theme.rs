use serde::Serialize;

/// Token categories the editor's highlighter distinguishes.
///
/// Serialized names are the camelCase forms the editor component matches
/// against, so renames here are breaking changes for the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenTag {
    Keyword,
    Name,
    Deleted,
    Character,
    PropertyName,
    MacroName,
    /// A variable name in call position.
    FunctionName,
    LabelName,
    Color,
    ConstantName,
    StandardName,
    DefinitionName,
    Separator,
    TypeName,
    ClassName,
    Number,
    Changed,
    Annotation,
    Modifier,
    #[serde(rename = "self")]
    SelfName,
    Namespace,
    Operator,
    OperatorKeyword,
    Url,
    Escape,
    Regexp,
    Link,
    SpecialString,
    Meta,
    Comment,
    Strong,
    Emphasis,
    Strikethrough,
    Heading,
    Atom,
    Bool,
    ProcessingInstruction,
    String,
    Inserted,
    Invalid,
}

/// One highlight rule: the token categories it covers plus its styles.
///
/// Colors are CSS variable references resolved by the host stylesheet; this
/// table never inspects them. A token covered by several rules receives all
/// of their styles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenStyle {
    pub tags: &'static [TokenTag],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<&'static str>,
}

const fn colored(tags: &'static [TokenTag], color: &'static str) -> TokenStyle {
    TokenStyle {
        tags,
        color: Some(color),
        font_weight: None,
        font_style: None,
        text_decoration: None,
    }
}

/// The editor's syntax highlight theme, one rule per style group.
pub const EDITOR_THEME: &[TokenStyle] = &[
    colored(&[TokenTag::Keyword], "var(--token-keyword)"),
    colored(
        &[
            TokenTag::Name,
            TokenTag::Deleted,
            TokenTag::Character,
            TokenTag::PropertyName,
            TokenTag::MacroName,
        ],
        "var(--color-text)",
    ),
    colored(
        &[TokenTag::FunctionName, TokenTag::LabelName],
        "var(--token-function)",
    ),
    colored(
        &[TokenTag::Color, TokenTag::ConstantName, TokenTag::StandardName],
        "var(--color-text)",
    ),
    colored(
        &[TokenTag::DefinitionName, TokenTag::Separator],
        "var(--color-text)",
    ),
    colored(
        &[
            TokenTag::TypeName,
            TokenTag::ClassName,
            TokenTag::Number,
            TokenTag::Changed,
            TokenTag::Annotation,
            TokenTag::Modifier,
            TokenTag::SelfName,
            TokenTag::Namespace,
        ],
        "var(--token-function)",
    ),
    colored(
        &[
            TokenTag::Operator,
            TokenTag::OperatorKeyword,
            TokenTag::Url,
            TokenTag::Escape,
            TokenTag::Regexp,
            TokenTag::Link,
            TokenTag::SpecialString,
        ],
        "var(--color-text)",
    ),
    colored(&[TokenTag::Meta, TokenTag::Comment], "var(--token-comment)"),
    TokenStyle {
        tags: &[TokenTag::Strong],
        color: None,
        font_weight: Some("bold"),
        font_style: None,
        text_decoration: None,
    },
    TokenStyle {
        tags: &[TokenTag::Emphasis],
        color: None,
        font_weight: None,
        font_style: Some("italic"),
        text_decoration: None,
    },
    TokenStyle {
        tags: &[TokenTag::Strikethrough],
        color: None,
        font_weight: None,
        font_style: None,
        text_decoration: Some("line-through"),
    },
    TokenStyle {
        tags: &[TokenTag::Link],
        color: Some("var(--color-text)"),
        font_weight: None,
        font_style: None,
        text_decoration: Some("underline"),
    },
    TokenStyle {
        tags: &[TokenTag::Heading],
        color: Some("var(--sk-fg-1)"),
        font_weight: Some("bold"),
        font_style: None,
        text_decoration: None,
    },
    colored(&[TokenTag::Atom, TokenTag::Bool], "var(--sk-code-atom)"),
    colored(
        &[TokenTag::ProcessingInstruction, TokenTag::String, TokenTag::Inserted],
        "var(--token-string)",
    ),
    colored(&[TokenTag::Invalid], "#ff008c"),
];

/// Every rule that styles `tag`, in table order.
pub fn styles_for(tag: TokenTag) -> Vec<&'static TokenStyle> {
    EDITOR_THEME
        .iter()
        .filter(|style| style.tags.contains(&tag))
        .collect()
}
