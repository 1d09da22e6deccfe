//! The dataset shipped with the site. Article bodies live under `content/`
//! and are fetched lazily; only metadata, examples, and tips are embedded.

use crate::store::DocStore;
use crate::types::{CodeExample, DocRecord};
use once_cell::sync::Lazy;

pub(crate) static BUILTIN: Lazy<DocStore> = Lazy::new(|| DocStore::new(modes(), instructions(), agents()));

fn modes() -> Vec<DocRecord> {
    vec![
        DocRecord::new(
            "ask-mode",
            "Ask Mode",
            "Ask questions and get contextual answers",
        )
        .example(
            CodeExample::new(
                "Question about a function",
                r#"// Question: "What does this function do?"
function debounce(func, wait) {
  let timeout;
  return function executedFunction(...args) {
    const later = () => {
      clearTimeout(timeout);
      func(...args);
    };
    clearTimeout(timeout);
    timeout = setTimeout(later, wait);
  };
}"#,
                "javascript",
            )
            .description("Copilot explains the debouncing concept and how this function works"),
        )
        .example(
            CodeExample::new(
                "Asking about an error",
                r#"// Question: "Why am I getting 'Cannot read property of undefined'?"
const user = data.user;
console.log(user.name); // Error!"#,
                "javascript",
            )
            .description("Copilot points out that data.user may be undefined and suggests fixes"),
        )
        .tip("Be specific in your questions")
        .tip("Provide context when needed")
        .tip("Use concrete examples")
        .tip("Ask for clarification when an answer is unclear")
        .related("Edit Mode", "/modes/edit-mode")
        .related("Agent Mode", "/modes/agent-mode"),
        DocRecord::new(
            "edit-mode",
            "Edit Mode",
            "Modify your code with natural-language instructions",
        )
        .example(CodeExample::new(
            "Refactoring to async/await",
            r#"// Instruction: "Convert this function to use async/await"
function fetchData() {
  return fetch('/api/data')
    .then(response => response.json())
    .then(data => processData(data))
    .catch(error => console.error(error));
}

// Result after the edit
async function fetchData() {
  try {
    const response = await fetch('/api/data');
    const data = await response.json();
    return processData(data);
  } catch (error) {
    console.error(error);
  }
}"#,
            "javascript",
        ))
        .example(CodeExample::new(
            "Adding validation",
            r#"// Instruction: "Add parameter validation"
function createUser(name, email) {
  return {
    name,
    email,
    createdAt: new Date()
  };
}

// Result
function createUser(name, email) {
  if (!name || typeof name !== 'string') {
    throw new Error('Name must be a non-empty string');
  }
  if (!email || !email.includes('@')) {
    throw new Error('Email must be valid');
  }

  return {
    name,
    email,
    createdAt: new Date()
  };
}"#,
            "javascript",
        ))
        .tip("Select the relevant code before requesting a change")
        .tip("Be precise in your instructions")
        .tip("Always review the proposed modifications")
        .tip("Use /edit for multi-file changes"),
        DocRecord::new(
            "agent-mode",
            "Agent Mode",
            "Specialized agents for complex tasks",
        )
        .example(CodeExample::new(
            "Using @workspace",
            r#"@workspace Find every file still using the old API and migrate it to the new version

// Copilot will:
// 1. Locate the affected files
// 2. Analyze the old API usages
// 3. Propose the edits
// 4. Apply the changes once approved"#,
            "plaintext",
        ))
        .example(CodeExample::new(
            "Using @terminal",
            r#"@terminal How do I install and configure PostgreSQL on Ubuntu?

// Copilot provides:
// - Installation commands
// - Initial configuration
// - Database creation
// - Verification commands"#,
            "plaintext",
        ))
        .tip("Use @workspace for multi-file operations")
        .tip("Combine several agents within one conversation")
        .tip("@terminal shines for DevOps and shell scripting")
        .tip("@vscode helps configure and customize your editor"),
        DocRecord::new(
            "plan-mode",
            "Plan Mode",
            "Plan and execute complex tasks step by step",
        )
        .example(CodeExample::new(
            "Migrating React to TypeScript",
            r#"Prompt: "Migrate my JavaScript React application to TypeScript"

Generated plan:
1. Install the TypeScript dependencies
2. Configure tsconfig.json
3. Rename .js files to .tsx
4. Add types incrementally
5. Fix the TypeScript errors
6. Test and validate"#,
            "plaintext",
        ))
        .tip("Let Copilot break complex tasks down")
        .tip("Validate each step before moving on")
        .tip("The plan adapts to your feedback")
        .tip("Use /plan to start planning"),
    ]
}

fn instructions() -> Vec<DocRecord> {
    vec![
        DocRecord::new(
            "prompt-engineering",
            "Prompt Engineering",
            "Techniques for writing effective prompts",
        )
        .example(CodeExample::new(
            "Vague vs specific prompt",
            r#"Vague prompt:
"Create a validation function"

Specific prompt:
"Create a TypeScript function that validates an email address per RFC 5322,
returns true when valid and false otherwise, with unit tests""#,
            "plaintext",
        ))
        .example(CodeExample::new(
            "Adding context",
            r#"Prompt with context:
"I am building a REST API for an e-commerce site.
Create a POST /api/orders endpoint that:
- Accepts { userId, items: [{productId, quantity}], shippingAddress }
- Checks available stock
- Computes the total including taxes
- Persists the order
- Returns the created order with a 201 status""#,
            "plaintext",
        ))
        .tip("Use clear, precise language")
        .tip("Mention the language or framework when relevant")
        .tip("State your constraints (performance, security, ...)")
        .tip("Ask for explanations when you need them"),
        DocRecord::new(
            "slash-commands",
            "Slash Commands",
            "Shortcuts for common actions",
        )
        .example(CodeExample::new(
            "Using /explain",
            r#"/explain
// On this code:
const memoizedValue = useMemo(() =>
  computeExpensiveValue(a, b),
  [a, b]
);

// Copilot explains:
// useMemo is a React hook that memoizes the result of an
// expensive computation. The value is only recomputed when
// 'a' or 'b' changes."#,
            "javascript",
        ))
        .example(CodeExample::new(
            "Using /tests",
            r#"/tests
// On this function:
function isPalindrome(str: string): boolean {
  const cleaned = str.toLowerCase().replace(/[^a-z0-9]/g, '');
  return cleaned === cleaned.split('').reverse().join('');
}

// Copilot generates:
describe('isPalindrome', () => {
  it('should return true for palindromes', () => {
    expect(isPalindrome('A man a plan a canal Panama')).toBe(true);
  });

  it('should return false for non-palindromes', () => {
    expect(isPalindrome('hello')).toBe(false);
  });
});"#,
            "typescript",
        )),
    ]
}

fn agents() -> Vec<DocRecord> {
    vec![DocRecord::new(
        "creating-agents",
        "Creating Custom Agents",
        "Guide to building your own Copilot agents",
    )
    .example(CodeExample::new(
        "Agent manifest",
        r#"{
  "name": "database-helper",
  "displayName": "Database Helper",
  "description": "Agent for database queries and migrations",
  "version": "1.0.0",
  "capabilities": {
    "commands": [
      {
        "name": "generateMigration",
        "description": "Generates a database migration"
      },
      {
        "name": "optimizeQuery",
        "description": "Optimizes a SQL query"
      }
    ]
  }
}"#,
        "json",
    ))
    .example(CodeExample::new(
        "Agent handler",
        r#"export async function handleRequest(
  request: AgentRequest,
  context: AgentContext
): Promise<AgentResponse> {
  const { command, parameters } = request;

  switch (command) {
    case 'generateMigration':
      return await generateMigration(parameters, context);

    case 'optimizeQuery':
      return await optimizeQuery(parameters, context);

    default:
      return {
        error: 'Unknown command'
      };
  }
}"#,
        "typescript",
    ))
    .tip("Start simple and iterate")
    .tip("Document your agent's capabilities")
    .tip("Handle errors explicitly")
    .tip("Test with a variety of inputs")]
}
