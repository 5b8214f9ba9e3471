/// External commands standing in for the layout and render services.
#[derive(knuffel::Decode, Debug, Default, Clone, PartialEq)]
pub struct Generator {
    #[knuffel(child)]
    pub layouts_command: Option<Command>,
    #[knuffel(child)]
    pub render_command: Option<Command>,
}

#[derive(knuffel::Decode, Debug, Clone, PartialEq)]
pub struct Command {
    #[knuffel(arguments)]
    pub argv: Vec<String>,
}
