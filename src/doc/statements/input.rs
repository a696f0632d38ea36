/*!
# `INPUT ["<prompt>",]<variable>[,<variable>...]`

## Purpose
Reads values typed by the operator.

## Remarks
The prompt, if any, is printed as it is. Each variable takes the next
word of input, where words are separated by spaces or line breaks.
A word that does not parse as the variable's type, or running out of
input, is a `BAD INPUT` error.

## Example
```text
INPUT "Name and age? ", name$, age
PRINT name$, " is ", age
```

*/
