//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Macros of the mdoc(7) package.

use super::defaults::{paragraph, section_heading};
use super::text_production::{
    section_name, volume_name, AtType, BxType, OsType, StType, ARCHITECTURES,
};
use super::MacroTable;
use crate::buffer::{append_field, Buffer, ListContext, References};
use crate::generator::{close_tags_until, generate_tag, parse_arguments};
use crate::token::Token;

pub fn register(table: &mut MacroTable) {
    register_document(table);
    register_semantic(table);
    register_enclosures(table);
    register_text_production(table);
    register_lists(table);
    register_references(table);
    register_functions(table);
}

/// Prologue, sections, paragraphs and displays
fn register_document(table: &mut MacroTable) {
    table.insert("Dd", |buffer, args, _| {
        buffer.date = args.trim().to_string();
        String::new()
    });
    table.insert("Dt", dt);
    table.insert("Os", |buffer, args, _| {
        buffer.os = args.trim().to_string();
        String::new()
    });
    table.insert("Sh", |buffer, args, _| section_heading(buffer, args));
    table.insert("Ss", |_, args, _| generate_tag("h3", args));
    table.insert("Pp", pp);
    table.insert("Lp", pp);
    table.insert("Bd", bd);
    table.insert("Ed", |buffer, _, _| close_tags_until("div", &mut buffer.open_tags));
    table.insert("D1", |buffer, args, _| {
        format!(
            "<div style=\"margin-left:{}%;\">{}</div>",
            buffer.style.indent, args
        )
    });
    table.insert("Dl", |buffer, args, _| {
        format!(
            "<div style=\"margin-left:{}%;\"><code>{}</code></div>",
            buffer.style.indent, args
        )
    });
    table.insert("Bf", bf);
    table.insert("Ef", |buffer, _, _| match buffer.active_font_modes.pop() {
        Some(tag) => format!("</{tag}>"),
        None => String::new(),
    });
}

/// Semantic markup of words
fn register_semantic(table: &mut MacroTable) {
    table.insert("Nm", nm);
    table.insert("Nd", |_, args, _| generate_tag("span", &format!("-- {args}")));
    table.insert("Ar", |_, args, _| match args {
        "" => generate_tag("i", "file..."),
        args => generate_tag("i", args),
    });
    table.insert("Pa", |_, args, _| match args {
        "" => generate_tag("i", "~"),
        args => generate_tag("i", args),
    });
    table.insert("Fl", |_, args, _| generate_tag("strong", &format!("-{args}")));
    table.insert("Cd", |buffer, args, _| {
        if buffer.is_inside_of_section("SYNOPSIS") {
            generate_tag("p>strong", args)
        } else {
            generate_tag("strong", args)
        }
    });
    table.insert("Vt", |buffer, args, _| {
        let mut result = generate_tag("i", args);
        if buffer.is_inside_of_section("SYNOPSIS") {
            result.push_str("<br>");
        }
        result
    });
    table.insert("Xr", xr);

    for name in ["Ad", "Em", "Va"] {
        table.insert(name, |_, args, _| generate_tag("i", args));
    }
    for name in ["Cm", "Ic", "Sy"] {
        table.insert(name, |_, args, _| generate_tag("strong", args));
    }
    for name in ["An", "Dv", "Er", "Ev", "Li", "Ms"] {
        table.insert(name, |_, args, _| generate_tag("span", args));
    }
    table.insert("Tn", |_, args, _| generate_tag("small", args));

    table.insert("Lk", |_, args, _| {
        let args = parse_arguments(args);
        let Some((url, text)) = args.split_first() else {
            return String::new();
        };
        let text = match text.join(" ") {
            text if text.is_empty() => url.clone(),
            text => text,
        };
        format!("<a href=\"{url}\">{text}</a>")
    });
    table.insert("Mt", |_, args, _| {
        let address = args.trim();
        format!("<a href=\"mailto:{address}\">{address}</a>")
    });
    table.insert("Sx", |_, args, _| generate_tag("i", args));
}

/// Enclosure and delimiter macros
fn register_enclosures(table: &mut MacroTable) {
    table.insert("Op", |_, args, _| generate_tag("span", &format!("[{args}]")));
    table.insert("Oo", |_, args, _| format!("[{args}"));
    table.insert("Oc", |_, args, _| format!("]{args}"));

    table.insert("Aq", |_, args, _| generate_tag("span", &format!("&lt;{args}&gt;")));
    table.insert("Ao", |_, _, _| generate_tag("span", "&lt;"));
    table.insert("Ac", |_, _, _| generate_tag("span", "&gt;"));
    table.insert("Bq", |_, args, _| generate_tag("span", &format!("[{args}]")));
    table.insert("Bo", |_, _, _| generate_tag("span", "["));
    table.insert("Bc", |_, _, _| generate_tag("span", "]"));
    table.insert("Brq", |_, args, _| generate_tag("span", &format!("{{{args}}}")));
    table.insert("Bro", |_, _, _| generate_tag("span", "{"));
    table.insert("Brc", |_, _, _| generate_tag("span", "}"));
    table.insert("Dq", |_, args, _| generate_tag("span", &format!("``{args}''")));
    table.insert("Do", |_, _, _| generate_tag("span", "``"));
    table.insert("Dc", |_, _, _| generate_tag("span", "''"));
    table.insert("Pq", |_, args, _| generate_tag("span", &format!("({args})")));
    table.insert("Po", |_, _, _| generate_tag("span", "("));
    table.insert("Pc", |_, _, _| generate_tag("span", ")"));
    table.insert("Qq", |_, args, _| generate_tag("span", &format!("\"{args}\"")));
    table.insert("Qo", |_, _, _| generate_tag("span", "\""));
    table.insert("Qc", |_, _, _| generate_tag("span", "\""));
    table.insert("Sq", |_, args, _| generate_tag("span", &format!("`{args}'")));
    table.insert("So", |_, _, _| generate_tag("span", "`"));
    table.insert("Sc", |_, _, _| generate_tag("span", "'"));
    table.insert("Ql", |_, args, _| generate_tag("span", &format!("`{args}'")));

    // User defined delimiters are printed as given
    for name in ["Eo", "Ec", "Eq"] {
        table.insert(name, |_, args, _| generate_tag("span", args));
    }

    table.insert("Pf", |_, args, _| {
        let args = parse_arguments(args);
        match args.split_first() {
            Some((prefix, rest)) => {
                let mut rest = rest.iter();
                let first = rest.next().cloned().unwrap_or_default();
                let tail = rest.cloned().collect::<Vec<_>>().join(" ");
                format!("{prefix}{first}{tail}")
            }
            None => String::new(),
        }
    });
    table.insert("Ns", |_, args, _| args.trim_start().to_string());
    table.insert("Ap", |_, args, _| format!("'{}", args.trim_start()));
    table.insert("Ta", |_, args, _| format!(" {args}"));
    for name in ["Xo", "Xc"] {
        table.insert(name, |_, args, _| args.to_string());
    }
}

/// Operating system and standard names
fn register_text_production(table: &mut MacroTable) {
    table.insert("St", |_, args, _| {
        let standard = parse_arguments(args).into_iter().next().unwrap_or_default();
        match standard.parse::<StType>() {
            Ok(st_type) => generate_tag("abbr", &st_type.to_string()),
            Err(_) => String::new(),
        }
    });
    table.insert("At", |_, args, _| {
        let at_type = args.parse::<AtType>().unwrap_or_default();
        generate_tag("span", &at_type.to_string().replace('&', "&amp;"))
    });
    table.insert("Bx", |_, args, _| {
        let args = parse_arguments(args);
        let version = args.first().map(String::as_str).unwrap_or_default();
        let variant = args.get(1).map(String::as_str);
        generate_tag("span", &BxType::format(version, variant))
    });
    table.insert("Bsx", |_, args, _| generate_tag("span", &OsType::Bsx.format(args.trim())));
    table.insert("Osx", |_, args, _| generate_tag("span", &OsType::Bsx.format(args.trim())));
    table.insert("Dx", |_, args, _| generate_tag("span", &OsType::Dx.format(args.trim())));
    table.insert("Fx", |_, args, _| generate_tag("span", &OsType::Fx.format(args.trim())));
    table.insert("Nx", |_, args, _| generate_tag("span", &OsType::Nx.format(args.trim())));
    table.insert("Ox", |_, args, _| generate_tag("span", &OsType::Ox.format(args.trim())));
    table.insert("Ux", |_, _, _| generate_tag("span", "UNIX"));
}

fn register_lists(table: &mut MacroTable) {
    table.insert("Bl", bl);
    table.insert("It", it);
    table.insert("El", |buffer, _, _| match buffer.lists.pop() {
        Some(list) if list.is_open => "</span></li></ul>".to_string(),
        Some(_) => "</ul>".to_string(),
        None => String::new(),
    });
}

fn register_references(table: &mut MacroTable) {
    table.insert("Rs", |buffer, _, _| {
        buffer.references = References::default();
        String::new()
    });
    table.insert("%A", |buffer, args, _| {
        buffer.references.authors.push(args.trim().to_string());
        String::new()
    });
    table.insert("%B", |buffer, args, _| reference(&mut buffer.references.book_title, args));
    table.insert("%D", |buffer, args, _| reference(&mut buffer.references.date, args));
    table.insert("%I", |buffer, args, _| {
        reference(&mut buffer.references.publisher_name, args)
    });
    table.insert("%J", |buffer, args, _| reference(&mut buffer.references.journal_name, args));
    table.insert("%N", |buffer, args, _| reference(&mut buffer.references.issue_number, args));
    table.insert("%O", |buffer, args, _| {
        reference(&mut buffer.references.optional_information, args)
    });
    table.insert("%P", |buffer, args, _| reference(&mut buffer.references.page_number, args));
    table.insert("%Q", |buffer, args, _| reference(&mut buffer.references.corporate, args));
    table.insert("%R", |buffer, args, _| reference(&mut buffer.references.report_name, args));
    table.insert("%T", |buffer, args, _| {
        reference(&mut buffer.references.article_title, args)
    });
    table.insert("%V", |buffer, args, _| reference(&mut buffer.references.volume, args));
    table.insert("Re", |buffer, _, _| {
        let fields = std::mem::take(&mut buffer.references).fields();
        if fields.is_empty() {
            String::new()
        } else {
            generate_tag("p", &fields.join(", "))
        }
    });
}

fn reference(field: &mut String, args: &str) -> String {
    append_field(field, args.trim());
    String::new()
}

fn register_functions(table: &mut MacroTable) {
    table.insert("Fn", |buffer, args, _| {
        let args = parse_arguments(args);
        match args.split_first() {
            Some((name, params)) if !name.is_empty() => {
                render_function(buffer, name, &params.join(", "))
            }
            _ => String::new(),
        }
    });
    table.insert("Ft", |buffer, args, _| {
        buffer.function_type = Some(args.trim().to_string());
        String::new()
    });
    table.insert("Fo", |buffer, args, _| {
        buffer.function_name = Some(args.trim().to_string());
        buffer.function_args = Some(Vec::new());
        String::new()
    });
    table.insert("Fa", |buffer, args, _| match buffer.function_args.as_mut() {
        Some(params) => {
            params.push(args.trim().to_string());
            String::new()
        }
        None => generate_tag("span", args),
    });
    table.insert("Fc", |buffer, _, _| {
        match (buffer.function_name.take(), buffer.function_args.take()) {
            (Some(name), Some(params)) => render_function(buffer, &name, &params.join(", ")),
            _ => String::new(),
        }
    });
    table.insert("Fd", |_, args, _| {
        generate_tag("strong", &parse_arguments(args).join(" ")) + "<br>"
    });
    table.insert("In", |buffer, args, _| {
        let mut result = generate_tag("strong", &format!("#include &lt;{}&gt;", args.trim()));
        if buffer.is_inside_of_section("SYNOPSIS") {
            result.push_str("<br>");
        }
        result
    });
}

/// Function signature; consumes the return type stored by `Ft`.
fn render_function(buffer: &mut Buffer, name: &str, params: &str) -> String {
    let function_type = match buffer.function_type.take() {
        Some(function_type) if !function_type.is_empty() => generate_tag("i", &function_type),
        _ => String::new(),
    };

    generate_tag(
        "span",
        &format!("{function_type}{}({params})", generate_tag("strong", name)),
    )
}

/// `.Dt title section [volume|arch]`
fn dt(buffer: &mut Buffer, args: &str, _: &Token) -> String {
    let mut args = parse_arguments(args).into_iter();
    let title = args.next().filter(|t| !t.is_empty());
    let section = args.next().filter(|s| !s.is_empty());
    let volume = args.next().filter(|v| !v.is_empty());

    buffer.title = title.unwrap_or_else(|| "UNTITLED".to_string());
    buffer.section = section.clone().unwrap_or_default();
    buffer.volume = volume.clone().unwrap_or_else(|| "LOCAL".to_string());

    let mut side_text = buffer.title.clone();
    let mut mid_text = buffer.volume.clone();

    if let Some(section) = section {
        side_text = format!("{}({})", buffer.title, section);
        let manual = section_name(&section);

        if let Some(name) = volume.as_deref().and_then(volume_name) {
            mid_text = name.to_string();
        } else if volume.is_some() && ARCHITECTURES.contains(&buffer.volume.as_str()) {
            mid_text = format!("BSD/{} {}", buffer.volume, manual.unwrap_or_default())
                .trim_end()
                .to_string();
        } else if let Some(manual) = manual {
            mid_text = format!("BSD {manual}");
        }
    }

    buffer.section_tags.push("section");

    format!(
        "<p><span>{side_text}</span><span>{mid_text}</span><span>{side_text}</span></p><section>"
    )
}

fn nm(buffer: &mut Buffer, args: &str, _: &Token) -> String {
    if buffer.name.is_empty() {
        buffer.name = args.trim().to_string();
    }

    match args {
        "" => generate_tag("strong", &buffer.name),
        args => generate_tag("strong", args),
    }
}

/// `.Xr name section` and any trailing punctuation
fn xr(_: &mut Buffer, args: &str, _: &Token) -> String {
    let mut args = parse_arguments(args).into_iter();
    let name = args.next().unwrap_or_default();
    let number = args.next().map(|n| format!("({n})")).unwrap_or_default();
    let text = args.collect::<Vec<_>>().join(" ");

    generate_tag("span", &format!("{name}{number}{text}"))
}

fn pp(buffer: &mut Buffer, _: &str, _: &Token) -> String {
    paragraph(buffer, "p") + "<p>"
}

/// `.Bd -type [-offset width] [-compact]`
fn bd(buffer: &mut Buffer, args: &str, _: &Token) -> String {
    let flags = parse_arguments(args);
    let mut style = String::new();

    if flags.iter().any(|f| f == "-literal" || f == "-unfilled") {
        style.push_str("white-space: pre;");
    }
    if flags.iter().any(|f| f == "-offset" || f == "-centered") {
        style.push_str(&format!("margin-left:{}%;", buffer.style.indent));
    }

    buffer.open_tags.push("div");

    format!("<div style=\"{style}\">")
}

/// `.Bf -emphasis|-literal|-symbolic`
fn bf(buffer: &mut Buffer, args: &str, _: &Token) -> String {
    let mode = parse_arguments(args).into_iter().next().unwrap_or_default();
    let tag = match mode.as_str() {
        "-emphasis" | "Em" => "i",
        "-symbolic" | "Sy" => "strong",
        _ => "span",
    };
    buffer.active_font_modes.push(tag);

    format!("<{tag}>")
}

/// `.Bl -type [modifiers]`
fn bl(buffer: &mut Buffer, args: &str, _: &Token) -> String {
    buffer.lists.push(ListContext {
        flags: parse_arguments(args),
        ..Default::default()
    });

    let indent = buffer.style.indent / 4.0 * (buffer.lists.len() - 1) as f64;

    format!("<ul style=\"list-style:none;padding:0 0 0 {indent}%;\">")
}

/// One list item. Later flags take precedence over earlier ones.
fn it(buffer: &mut Buffer, args: &str, _: &Token) -> String {
    let Some(list) = buffer.lists.last_mut() else {
        return String::new();
    };

    let pre = if list.is_open { "</span></li>" } else { "" };
    list.is_open = true;

    let mut tag = String::new();
    let mut tag_styles = String::new();
    let mut content_styles = String::from("margin-bottom:2%;");

    for flag in &list.flags {
        match flag.as_str() {
            "-bullet" => {
                tag = "&compfn;".to_string();
                content_styles.push_str("margin-left:2%;");
            }
            "-dash" | "-hyphen" => {
                tag = "&minus;".to_string();
                content_styles.push_str("margin-left:2%;");
            }
            "-enum" => {
                list.prev_ordinal += 1;
                tag = format!("{}.", list.prev_ordinal);
                content_styles.push_str("margin-left:2%;");
            }
            "-item" => {
                tag = String::new();
                content_styles.push_str("margin-left:2%;");
            }
            "-tag" => {
                tag = args.to_string();
                tag_styles.push_str("display:inline-block;");
                content_styles.push_str("margin-left:2%;");
            }
            "-hang" => {
                tag = generate_tag("i", args);
                tag_styles.push_str("width:8%;display:inline-block;");
                content_styles.push_str("margin-left:2%;");
            }
            "-ohang" => {
                tag = generate_tag("strong", args);
                tag_styles.push_str("display:block;");
                content_styles.push_str("display:inline-block;");
            }
            "-inset" => {
                tag = generate_tag("i", args);
                content_styles.push_str("display:inline-block;");
            }
            "-compact" => {
                tag_styles.push_str("margin-bottom: 0;");
                content_styles.push_str("margin-bottom:0;");
            }
            _ => {}
        }
    }

    format!(
        "{pre}<li><span style=\"{tag_styles}\">{tag}</span><span style=\"{content_styles}\">"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn table() -> MacroTable {
        let mut table = MacroTable::new();
        register(&mut table);
        table
    }

    fn call(table: &MacroTable, buffer: &mut Buffer, name: &str, args: &str) -> String {
        table[name](buffer, args, &Token::default())
    }

    #[rstest]
    #[case("LS 1", "LS(1)", "BSD General Commands Manual")]
    #[case("MOUNT 8 amd64", "MOUNT(8)", "BSD/amd64 System Manager's Manual")]
    #[case("FOO 3 PRM", "FOO(3)", "Programmer's Manual")]
    #[case("FOO", "FOO", "LOCAL")]
    #[case("", "UNTITLED", "LOCAL")]
    fn document_title(#[case] args: &str, #[case] side: &str, #[case] mid: &str) {
        let mut buffer = Buffer::default();
        let html = call(&table(), &mut buffer, "Dt", args);
        assert_eq!(
            html,
            format!("<p><span>{side}</span><span>{mid}</span><span>{side}</span></p><section>")
        );
        assert_eq!(buffer.section_tags, vec!["section"]);
    }

    #[rstest]
    #[case("Aq", "x", "<span>&lt;x&gt;</span>")]
    #[case("Bq", "x", "<span>[x]</span>")]
    #[case("Brq", "x", "<span>{x}</span>")]
    #[case("Dq", "x", "<span>``x''</span>")]
    #[case("Pq", "x", "<span>(x)</span>")]
    #[case("Qq", "x", "<span>\"x\"</span>")]
    #[case("Sq", "x", "<span>`x'</span>")]
    #[case("Op", "x", "<span>[x]</span>")]
    #[case("Fl", "v", "<strong>-v</strong>")]
    #[case("Ar", "", "<i>file...</i>")]
    #[case("Pa", "", "<i>~</i>")]
    #[case("Nd", "list files", "<span>-- list files</span>")]
    #[case("Xr", "ls 1 ,", "<span>ls(1),</span>")]
    #[case("St", "-ansiC", "<abbr>ANSI X3.159-1989 (“ANSI C89”)</abbr>")]
    #[case("St", "-unknown", "")]
    #[case("At", "v6", "<span>Version 6 AT&amp;T UNIX</span>")]
    #[case("Bx", "-devel", "<span>BSD(currently under development)</span>")]
    #[case("Bx", "4.4", "<span>4.4BSD</span>")]
    #[case("Nx", "", "<span>NetBSD</span>")]
    #[case("Ox", "7.5", "<span>OpenBSD 7.5</span>")]
    #[case("Ux", "", "<span>UNIX</span>")]
    #[case("Pf", "( a b c", "(ab c")]
    #[case("Lk", "https://example.org docs", "<a href=\"https://example.org\">docs</a>")]
    #[case("Mt", "root@localhost", "<a href=\"mailto:root@localhost\">root@localhost</a>")]
    #[case("Fn", "open path flags", "<span><strong>open</strong>(path, flags)</span>")]
    #[case("Fn", "", "")]
    fn inline_macros(#[case] name: &str, #[case] args: &str, #[case] output: &str) {
        let mut buffer = Buffer::default();
        assert_eq!(call(&table(), &mut buffer, name, args), output);
    }

    #[test]
    fn name_is_remembered() {
        let table = table();
        let mut buffer = Buffer::default();
        assert_eq!(call(&table, &mut buffer, "Nm", "ls"), "<strong>ls</strong>");
        assert_eq!(call(&table, &mut buffer, "Nm", ""), "<strong>ls</strong>");
        assert_eq!(call(&table, &mut buffer, "Nm", "cp"), "<strong>cp</strong>");
        assert_eq!(buffer.name, "ls");
    }

    #[test]
    fn bullet_list() {
        let table = table();
        let mut buffer = Buffer::default();
        let mut html = call(&table, &mut buffer, "Bl", "-bullet");
        html += &call(&table, &mut buffer, "It", "");
        html += &call(&table, &mut buffer, "It", "");
        html += &call(&table, &mut buffer, "El", "");

        let item = "<li><span style=\"\">&compfn;</span>\
                    <span style=\"margin-bottom:2%;margin-left:2%;\">";
        assert_eq!(
            html,
            format!(
                "<ul style=\"list-style:none;padding:0 0 0 0%;\">{item}</span></li>{item}</span></li></ul>"
            )
        );
        assert!(buffer.lists.is_empty());
    }

    #[test]
    fn nested_lists_are_indented() {
        let table = table();
        let mut buffer = Buffer::default();
        call(&table, &mut buffer, "Bl", "-tag");
        assert_eq!(
            call(&table, &mut buffer, "Bl", "-enum"),
            "<ul style=\"list-style:none;padding:0 0 0 2%;\">"
        );
        assert!(call(&table, &mut buffer, "It", "").contains(">1.</span>"));
        assert!(call(&table, &mut buffer, "It", "").contains(">2.</span>"));
        assert_eq!(call(&table, &mut buffer, "El", ""), "</span></li></ul>");
        assert_eq!(
            call(&table, &mut buffer, "It", "-v"),
            "<li><span style=\"display:inline-block;\">-v</span>\
             <span style=\"margin-bottom:2%;margin-left:2%;\">"
        );
    }

    #[test]
    fn later_list_flags_win() {
        let table = table();
        let mut buffer = Buffer::default();
        call(&table, &mut buffer, "Bl", "-dash -bullet -compact");
        assert_eq!(
            call(&table, &mut buffer, "It", ""),
            "<li><span style=\"margin-bottom: 0;\">&compfn;</span>\
             <span style=\"margin-bottom:2%;margin-left:2%;margin-left:2%;margin-bottom:0;\">"
        );
    }

    #[test]
    fn list_macros_without_list() {
        let table = table();
        let mut buffer = Buffer::default();
        assert_eq!(call(&table, &mut buffer, "It", "x"), "");
        assert_eq!(call(&table, &mut buffer, "El", ""), "");
    }

    #[test]
    fn function_block() {
        let table = table();
        let mut buffer = Buffer::default();
        call(&table, &mut buffer, "Ft", "int");
        call(&table, &mut buffer, "Fo", "main");
        call(&table, &mut buffer, "Fa", "int argc");
        call(&table, &mut buffer, "Fa", "char **argv");
        assert_eq!(
            call(&table, &mut buffer, "Fc", ""),
            "<span><i>int</i><strong>main</strong>(int argc, char **argv)</span>"
        );
        assert!(buffer.function_type.is_none());
        assert!(buffer.function_args.is_none());

        assert_eq!(call(&table, &mut buffer, "Fc", ""), "");
        assert_eq!(call(&table, &mut buffer, "Fa", "void"), "<span>void</span>");
    }

    #[test]
    fn references() {
        let table = table();
        let mut buffer = Buffer::default();
        for (name, args) in [
            ("Rs", ""),
            ("%A", "J. Doe"),
            ("%A", "R. Roe"),
            ("%T", "Roff"),
            ("%T", "Internals"),
            ("%D", "1990"),
        ] {
            assert_eq!(call(&table, &mut buffer, name, args), "");
        }
        assert_eq!(
            call(&table, &mut buffer, "Re", ""),
            "<p>J. Doe and R. Roe, 1990, Roff Internals</p>"
        );
        assert_eq!(call(&table, &mut buffer, "Re", ""), "");
    }

    #[test]
    fn font_mode_block() {
        let table = table();
        let mut buffer = Buffer::default();
        assert_eq!(call(&table, &mut buffer, "Bf", "-symbolic"), "<strong>");
        assert_eq!(call(&table, &mut buffer, "Ef", ""), "</strong>");
        assert_eq!(call(&table, &mut buffer, "Ef", ""), "");
    }

    #[test]
    fn synopsis_only_breaks() {
        let table = table();
        let mut buffer = Buffer::default();
        assert_eq!(call(&table, &mut buffer, "Vt", "FILE"), "<i>FILE</i>");
        buffer.section = "SYNOPSIS".to_string();
        assert_eq!(call(&table, &mut buffer, "Vt", "FILE"), "<i>FILE</i><br>");
        assert_eq!(
            call(&table, &mut buffer, "Cd", "device"),
            "<p><strong>device</strong></p>"
        );
    }
}
