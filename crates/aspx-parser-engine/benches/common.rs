// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_page_content(size: usize) -> String {
    let header = "<%@ Page Language=\"C#\" AutoEventWireup=\"true\" %>\n<html>\n<body>\n";
    let row = "  <%-- row --%>\n  <asp:Panel ID=\"p1\" runat=\"server\" CssClass='row'>\n    <asp:Label Text='<%# Eval(\"Name\") %>' runat=\"server\" /><br>\n    <% if (Show) { %><span><%= Value %></span><% } %>\n    <script>if (a < b) { x = \"</b>\"; }</script>\n    <!-- #include file=\"row.inc\" -->\n  </asp:Panel>\n";
    let footer = "</body>\n</html>\n";
    format!("{header}{}{footer}", row.repeat(size))
}

#[allow(dead_code)]
pub fn generate_nested_markup(sections: usize, depth: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("<div id=\"section{section}\">\n"));
        content.push_str(&generate_nested_content(depth, 1));
        content.push_str("</div>\n");
    }

    content
}

#[allow(dead_code)]
fn generate_nested_content(remaining_depth: usize, current_level: usize) -> String {
    if remaining_depth == 0 {
        return String::new();
    }

    let indent = "  ".repeat(current_level);
    let mut content = String::new();

    content.push_str(&format!("{indent}<asp:Panel Level=\"{current_level}\">\n"));
    for i in 0..3 {
        content.push_str(&format!(
            "{indent}  <p class=item>Item {i} at level {current_level}<br>\n"
        ));
    }

    // leave every third level unclosed so recovery paths are measured too
    if current_level % 3 == 0 {
        content.push_str(&format!("{indent}  <em>unclosed\n"));
    }

    content.push_str(&generate_nested_content(
        remaining_depth - 1,
        current_level + 1,
    ));
    content.push_str(&format!("{indent}</asp:Panel>\n"));
    content
}
