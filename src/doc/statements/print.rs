/*!
# `PRINT <expression>[,<expression>...]`

## Purpose
Output information to the terminal.

## Remarks
A string literal prints as it is with nothing after it. Any other
expression, string expressions included, prints its value followed
by a line break.

## Example
```text
x = 12
PRINT "x is ", x, "x$ is ", "twelve"
```
```text
x is 12
x$ is twelve
```

*/
