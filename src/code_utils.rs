use crate::model::SolutionLang;
use egui_code_editor::Syntax;

pub fn syntax_for(lang: SolutionLang) -> Syntax {
    match lang {
        SolutionLang::Python => Syntax::python(),
        SolutionLang::Javascript => javascript_syntax(),
        SolutionLang::Java => java_syntax(),
    }
}

pub fn javascript_syntax() -> Syntax {
    Syntax::new("javascript")
        .with_comment("//")
        .with_comment_multiline(["/*", "*/"])
        .with_keywords([
            "async", "await", "break", "case", "catch", "class", "const", "continue", "default",
            "delete", "do", "else", "export", "extends", "finally", "for", "function", "if",
            "import", "in", "instanceof", "let", "new", "of", "return", "switch", "this", "throw",
            "try", "typeof", "var", "while", "yield",
        ])
        .with_types([
            "Array", "Map", "Set", "Object", "Number", "String", "Boolean", "Promise",
        ])
        .with_special(["true", "false", "null", "undefined", "NaN"])
}

pub fn java_syntax() -> Syntax {
    Syntax::new("java")
        .with_comment("//")
        .with_comment_multiline(["/*", "*/"])
        .with_keywords([
            "abstract", "break", "case", "catch", "class", "continue", "default", "do", "else",
            "extends", "final", "finally", "for", "if", "implements", "import", "instanceof",
            "interface", "new", "package", "private", "protected", "public", "return", "static",
            "super", "switch", "synchronized", "this", "throw", "throws", "try", "volatile", "while",
        ])
        .with_types([
            "int", "long", "short", "byte", "char", "float", "double", "boolean", "void",
            "String", "Integer", "List", "Map", "HashMap", "ArrayList", "Set",
        ])
        .with_special(["true", "false", "null"])
}
