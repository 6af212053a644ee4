/// Build the single user turn. The idea is embedded verbatim.
pub fn user_prompt(product_idea: &str) -> String {
    format!(
        "Generate a technical specification for the following product idea:\n\n\
         {product_idea}\n\n\
         Provide a professional, comprehensive technical specification document."
    )
}
