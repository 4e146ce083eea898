use askama::Template;

/// Template data for one route handler inside a generated controller
#[derive(Debug, Clone)]
pub struct RouteTemplateData {
    /// Route path segment passed to `@Get`
    pub path: String,
    /// Handler and service method name
    pub handler: String,
    /// Declared extra parameters, pre-rendered as `, id: any, extra: any`
    pub extra_params: String,
    /// Forwarded call arguments, pre-rendered as `body, id`
    pub call_args: String,
}

/// Template data for generating a NestJS controller from a service
#[derive(Template)]
#[template(path = "controller.ts.txt", escape = "none")]
pub struct ControllerTemplateData {
    /// Controller base name, also the `@Controller` route prefix
    pub base_name: String,
    /// Exported controller class name
    pub controller_type: String,
    /// Injected service class name
    pub service_type: String,
    /// One entry per retained service method
    pub routes: Vec<RouteTemplateData>,
}

/// Render a template and guarantee the output ends with a newline.
pub fn render_source<T: Template>(template: &T) -> askama::Result<String> {
    let mut rendered = template.render()?;
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}
