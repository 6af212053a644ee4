pub mod instructions;
pub mod sections;
pub mod user;

use specgen_core::GenerationRequest;

/// The two messages sent to the model for one generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Assemble the system and user prompts for a validated request.
pub fn assemble_prompt(req: &GenerationRequest) -> Prompt {
    let mut system = String::new();
    system.push_str(
        "You are an expert technical writer and product manager. \
         Your task is to generate professional technical specifications (ТЗ) for software products.\n\n",
    );
    system.push_str(instructions::language_instruction(req.language));
    system.push('\n');
    system.push_str(instructions::detail_instruction(req.detail_level));
    system.push_str("\n\n");
    sections::append_sections(&mut system);
    system.push_str(
        "\nUse clear formatting with headers, bullet points, and organized sections. \
         Be specific and actionable.",
    );

    Prompt {
        system,
        user: user::user_prompt(&req.product_idea),
    }
}
