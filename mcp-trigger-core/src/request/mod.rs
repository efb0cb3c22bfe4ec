/// Builds the address of an endpoint: `{base_url}{workflow_id}/{endpoint}`.
///
/// Plain concatenation. Nothing is percent-encoded and the base URL is not
/// normalized, so it must already end with `/`; `https://x/mcp` yields
/// `https://x/mcpW/Foo`.
pub fn compose_target_url(base_url: &str, workflow_id: &str, endpoint: &str) -> String {
    let mut url =
        String::with_capacity(base_url.len() + workflow_id.len() + endpoint.len() + 1);
    url.push_str(base_url);
    url.push_str(workflow_id);
    url.push('/');
    url.push_str(endpoint);
    url
}
