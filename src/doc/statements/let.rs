/*!
# `<variable> = <expression>`

## Purpose
Assign a value to the variable.

## Remarks
There is no `LET` keyword. The expression must have the type of the
variable.

## Example
```text
a = 10
PRINT a
a = a * 2
PRINT a
```
```text
10
20
```

*/
