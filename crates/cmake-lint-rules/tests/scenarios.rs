//! End-to-end scenarios running the full rule catalog.

use cmake_lint_core::{LintConfiguration, Linter, Outcome, Report, SourceFile, CATEGORIES};
use cmake_lint_rules::all_rules;

fn linter(filter: &str) -> Linter {
    let config = LintConfiguration::builder()
        .cli_filter(filter)
        .build()
        .expect("valid filter");
    Linter::builder().config(config).rules(all_rules()).build()
}

fn lint(filter: &str, path: &str, content: &str) -> Report {
    linter(filter).lint_source(&SourceFile::from_content(path, content))
}

const CLEAN: &str = "\
cmake_minimum_required(VERSION 3.20)
project(demo LANGUAGES C)

# Sources
set(SOURCES
    main.c
    util.c)

if(WIN32)
  add_definitions(-DWINDOWS)
elseif(APPLE)
  message(STATUS \"Building on macOS\")
else()
  foreach(src IN LISTS SOURCES)
    message(STATUS ${src})
  endforeach()
endif()

add_executable(demo ${SOURCES})
";

#[test]
fn clean_project_has_no_diagnostics() {
    let report = lint("", "CMakeLists.txt", CLEAN);
    assert_eq!(report.render(), "");
    assert_eq!(report.outcome(), Outcome::Clean);
}

#[test]
fn long_line_yields_one_linelength_diagnostic() {
    let long = format!("set(A {})", "x".repeat(78));
    assert_eq!(long.chars().count(), 85);
    let content = format!("project(foo)\n{long}\n");

    let report = lint("", "CMakeLists.txt", &content);
    let found = report.by_category("linelength");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].line, 2);

    let report = lint("-linelength", "CMakeLists.txt", &content);
    assert!(report.by_category("linelength").is_empty());
}

#[test]
fn minority_casing_yields_one_wonkycase_diagnostic() {
    let content = "project(foo)\nset(A 1)\nMY_FUNC(Arg1 Arg2)\nadd_library(x a.c)\n";
    let report = lint("", "CMakeLists.txt", content);
    let found = report.by_category("readability/wonkycase");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].line, 3);
}

#[test]
fn unterminated_quote_yields_one_syntax_diagnostic() {
    let content = "project(foo)\nset(FOO \"bar)\nset(B  2)\nmessage(STATUS \"done\")\t\n";
    let report = lint("", "CMakeLists.txt", content);

    let syntax = report.by_category("syntax");
    assert_eq!(syntax.len(), 1);
    assert_eq!(syntax[0].line, 2);

    // Later commands are still checked.
    assert_eq!(report.by_category("whitespace/extra").len(), 1);
    assert_eq!(report.by_category("whitespace/eol").len(), 1);
}

#[test]
fn quoted_run_inside_argument_is_not_crowded() {
    let report = lint("", "CMakeLists.txt", "add_definitions(-DMSG=\"hello  world\")\n");
    assert!(report.diagnostics.is_empty(), "{}", report.render());
}

#[test]
fn mixed_case_only_file_has_no_case_diagnostics() {
    let report = lint("", "CMakeLists.txt", "Project(foo)\nAdd_Library(x a.c)\n");
    assert!(report.by_category("readability/mixedcase").is_empty());
    assert!(report.by_category("readability/wonkycase").is_empty());
}

#[test]
fn empty_file_is_clean() {
    let report = lint("", "CMakeLists.txt", "");
    assert!(report.diagnostics.is_empty());
    assert_eq!(report.outcome(), Outcome::Clean);
    assert_eq!(report.outcome().exit_code(), 0);
}

#[test]
fn comment_only_file_is_clean() {
    let report = lint("", "helpers.cmake", "# nothing here\n\n# really\n");
    assert!(report.diagnostics.is_empty());
}

#[test]
fn disabled_category_never_reports() {
    let messy = "Project (foo) \n\tSET( A  b)\nif()\nendwhile(x)\nset(C \"d)\n";
    for category in CATEGORIES {
        let report = lint(&format!("-{}", category.name), "FindFoo.cmake", messy);
        assert!(
            report.by_category(category.name).is_empty(),
            "{} reported while disabled",
            category.name
        );
    }
    let report = lint("-", "FindFoo.cmake", messy);
    assert!(report.diagnostics.is_empty());
}

#[test]
fn group_disable_with_specific_enable() {
    let content = "\tset(A 1) \n";
    let report = lint("-whitespace,+whitespace/tabs", "a.cmake", content);
    let categories: Vec<&str> = report
        .diagnostics
        .iter()
        .map(|d| d.category.as_str())
        .collect();
    assert_eq!(categories, ["whitespace/tabs"]);
}

#[test]
fn pragmas_stay_in_their_file() {
    let tabs = "# lint_cmake: pragma(-whitespace/tabs)\n\tset(A 1)\n";
    let plain = "\tset(B 2)\n";
    let sources = [
        SourceFile::from_content("a.cmake", tabs),
        SourceFile::from_content("b.cmake", plain),
        SourceFile::from_content("c.cmake", tabs),
    ];
    let report = linter("").lint_sources(&sources);
    let tab_files: Vec<String> = report
        .by_category("whitespace/tabs")
        .iter()
        .map(|d| d.file.display().to_string())
        .collect();
    assert_eq!(tab_files, ["b.cmake"]);
}

#[test]
fn pragma_can_reenable_what_the_command_line_disabled() {
    let content = "# lint_cmake: pragma(+linelength)\n# ".to_string() + &"x".repeat(90) + "\n";
    let report = lint("-linelength", "a.cmake", &content);
    assert_eq!(report.by_category("linelength").len(), 1);
}

#[test]
fn file_level_diagnostics_use_line_zero() {
    let report = lint("", "cmake/Findfoo.cmake", "set(A 1)\n");
    insta::assert_snapshot!(report.render().trim_end(), @r"
    cmake/Findfoo.cmake:0: Find modules should use uppercase names; consider using FindFOO.cmake [convention/filename]
    cmake/Findfoo.cmake:0: Package should include FindPackageHandleStandardArgs [package/consistency]
    cmake/Findfoo.cmake:0: Package should use FIND_PACKAGE_HANDLE_STANDARD_ARGS [package/consistency]
    ");
    assert_eq!(report.outcome(), Outcome::ViolationsFound);
    assert_eq!(report.error_count(), 3);
}

#[test]
fn output_is_idempotent() {
    let messy = "Project (foo) \n\tSET( A  b)\nif()\nendwhile(x)\n";
    let first = lint("", "CMakeLists.txt", messy).render();
    let second = lint("", "CMakeLists.txt", messy).render();
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn diagnostics_are_ordered_by_line() {
    let messy = "Project (foo) \n\tSET( A  b)\nif()\nendwhile(x)\n";
    let report = lint("", "CMakeLists.txt", messy);
    let lines: Vec<usize> = report.diagnostics.iter().map(|d| d.line).collect();
    let mut sorted = lines.clone();
    sorted.sort_unstable();
    assert_eq!(lines, sorted);
}
