const DESCRIPTION_PLACEHOLDER: &str = "{description}";

/// Instruction template sent to the model. `{description}` is replaced verbatim.
const COMPONENT_PROMPT_TEMPLATE: &str = r##"
You are an expert Preact + TypeScript + Tailwind CSS developer.

Generate a production-ready component based on: **{description}**

---

## REQUIREMENTS

Generate EXACTLY 2 files:
1. Component file (.tsx)
2. Test file (.test.tsx)

**File Paths:**
- `src/components/[ComponentName]/[ComponentName].tsx`
- `src/components/[ComponentName]/[ComponentName].test.tsx`

*ComponentName must be PascalCase (e.g., "button" → "Button", "user card" → "UserCard")*

---

## COMPONENT (.tsx)

**Imports:**
```typescript
import { h } from 'preact';
import type { FunctionalComponent } from 'preact';
```

**Structure:**
- Define props interface: `interface [ComponentName]Props { ... }`
- Export as: `export const [ComponentName]: FunctionalComponent<[ComponentName]Props> = ({ ...props }) => { ... }`
- Use hooks if needed (useState, useEffect, etc.)

**Styling:**
- ONLY Tailwind utility classes via `className`
- NO inline styles or CSS-in-JS

**Quality:**
- Explicit TypeScript types
- No TODOs or placeholders
- Semantic HTML with accessibility in mind

---

## TEST (.test.tsx)

**Imports:**
```typescript
import { render } from '@testing-library/preact';
import { [ComponentName] } from './[ComponentName]';
```

**Structure:**
```typescript
describe('[ComponentName]', () => {
  it('renders correctly', () => {
    const { getByText } = render(<[ComponentName] />);
    expect(getByText('...')).toBeTruthy();
  });
});
```

---

## EXAMPLE OUTPUT

```json
[
  {
    "path": "src/components/Button/Button.tsx",
    "content": "import { h } from 'preact';\nimport type { FunctionalComponent } from 'preact';\n\ninterface ButtonProps {\n  label: string;\n  onClick?: () => void;\n}\n\nexport const Button: FunctionalComponent<ButtonProps> = ({ label, onClick }) => {\n  return (\n    <button onClick={onClick} className=\"px-4 py-2 bg-blue-500 text-white rounded hover:bg-blue-600\">\n      {label}\n    </button>\n  );\n};"
  },
  {
    "path": "src/components/Button/Button.test.tsx",
    "content": "import { render } from '@testing-library/preact';\nimport { Button } from './Button';\n\ndescribe('Button', () => {\n  it('renders correctly', () => {\n    const { getByText } = render(<Button label=\"Click me\" />);\n    expect(getByText('Click me')).toBeTruthy();\n  });\n});"
  }
]
```
"##;

/// Build the final prompt for the model from a component description.
///
/// The description is substituted verbatim. Rejecting blank input is the
/// caller's job.
pub fn build_prompt(description: &str) -> String {
    COMPONENT_PROMPT_TEMPLATE.replacen(DESCRIPTION_PLACEHOLDER, description, 1)
}

/// Append a style-variation instruction for the 1-based variant `index`.
pub fn variant_description(description: &str, index: usize) -> String {
    format!("{description}\n\nStyle variation #{index}: Use a different visual approach.")
}
